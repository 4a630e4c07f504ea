use crate::models::Entry;

/// Brit-crime slang bundled with the game.
const SLANG: &[(&str, &str)] = &[
    ("grass", "informer to the police"),
    ("gaff", "house or place"),
    ("quid", "one pound sterling"),
    ("dodgy", "suspicious or untrustworthy"),
    ("skint", "broke, out of money"),
    ("geezer", "man, often tough or streetwise"),
    ("nick", "to steal; also a police station"),
    ("row", "heated argument"),
    ("minder", "bodyguard or protector"),
    ("sorted", "taken care of, handled"),
    ("bent", "corrupt (esp. a cop or official)"),
    ("bird", "prison sentence"),
    ("blag", "robbery; to obtain by deception"),
    ("banged up", "imprisoned, locked up"),
    ("Old Bill", "the police"),
    ("plod", "police officer; the police"),
    ("copper", "police officer"),
    ("screw", "prison officer/guard"),
    ("nark", "police informant"),
    ("lag", "convict; prisoner"),
    ("on remand", "held in custody awaiting trial"),
    ("nicked", "arrested"),
    ("cosh", "blunt weapon used to strike"),
    ("mug", "to rob with violence"),
    ("fence", "dealer in stolen goods"),
    ("banged to rights", "caught red-handed with proof"),
    ("tool up", "arm oneself with weapons"),
    ("villain", "career criminal"),
    ("chancer", "opportunist who takes risky chances"),
    ("gaffer", "boss; person in charge"),
];

pub fn default_bank() -> Vec<Entry> {
    SLANG
        .iter()
        .map(|(term, definition)| Entry::new(*term, *definition))
        .collect()
}
