/// Present participles that the suffix rules would get wrong
pub const IRREGULAR_PRESENT: &[(&str, &str)] = &[
    ("be", "being"),
    ("have", "having"),
    ("do", "doing"),
    ("go", "going"),
    ("rise", "rising"),
    ("come", "coming"),
    ("happen", "happening"),
    ("move", "moving"),
    ("determine", "determining"),
    ("use", "using"),
    ("see", "seeing"),
    ("agree", "agreeing"),
    ("flee", "fleeing"),
    ("die", "dying"),
    ("lie", "lying"),
    ("tie", "tying"),
    ("run", "running"),
    ("get", "getting"),
    ("sit", "sitting"),
    ("stop", "stopping"),
    ("swim", "swimming"),
    ("put", "putting"),
    ("begin", "beginning"),
    ("plan", "planning"),
    ("win", "winning"),
    ("set", "setting"),
];

/// Past participles that the suffix rules would get wrong
pub const IRREGULAR_PAST: &[(&str, &str)] = &[
    ("be", "been"),
    ("have", "had"),
    ("do", "done"),
    ("go", "gone"),
    ("rise", "risen"),
    ("come", "come"),
    ("move", "moved"),
    ("determine", "determined"),
    ("use", "used"),
    ("happen", "happened"),
    ("see", "seen"),
    ("take", "taken"),
    ("give", "given"),
    ("make", "made"),
    ("know", "known"),
    ("get", "got"),
    ("say", "said"),
    ("run", "run"),
    ("write", "written"),
    ("think", "thought"),
    ("bring", "brought"),
    ("buy", "bought"),
    ("catch", "caught"),
    ("teach", "taught"),
    ("find", "found"),
    ("leave", "left"),
    ("feel", "felt"),
    ("keep", "kept"),
    ("hold", "held"),
    ("tell", "told"),
    ("sell", "sold"),
    ("begin", "begun"),
    ("break", "broken"),
    ("choose", "chosen"),
    ("drive", "driven"),
    ("eat", "eaten"),
    ("fall", "fallen"),
    ("fly", "flown"),
    ("forget", "forgotten"),
    ("grow", "grown"),
    ("hear", "heard"),
    ("lose", "lost"),
    ("meet", "met"),
    ("pay", "paid"),
    ("put", "put"),
    ("read", "read"),
    ("send", "sent"),
    ("spend", "spent"),
    ("stand", "stood"),
    ("speak", "spoken"),
    ("win", "won"),
    ("sing", "sung"),
    ("swim", "swum"),
    ("sit", "sat"),
    ("build", "built"),
    ("show", "shown"),
    ("stop", "stopped"),
    ("plan", "planned"),
    ("try", "tried"),
    ("study", "studied"),
    ("carry", "carried"),
];

/// Base verbs that end in "ing" without being participles
const ING_BASE_FORMS: &[&str] = &[
    "bring", "cling", "fling", "ring", "sing", "sling", "spring", "sting", "string", "swing",
    "wring",
];

/// Base verbs that end in "ed" without being participles
const ED_BASE_FORMS: &[&str] = &[
    "bleed", "breed", "embed", "exceed", "feed", "heed", "need", "proceed", "seed", "shed",
    "speed", "succeed", "wed",
];

fn lookup(table: &[(&str, &'static str)], verb: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(base, _)| *base == verb)
        .map(|(_, form)| *form)
}

/// Convert a base verb to its present participle (-ing) form
pub fn to_present_participle(verb: &str) -> String {
    let verb = verb.to_lowercase();
    if let Some(form) = lookup(IRREGULAR_PRESENT, &verb) {
        return form.to_string();
    }
    match verb.strip_suffix('e') {
        Some(stem) => format!("{stem}ing"),
        None => format!("{verb}ing"),
    }
}

/// Convert a base verb to its past participle (-ed) form
pub fn to_past_participle(verb: &str) -> String {
    let verb = verb.to_lowercase();
    if let Some(form) = lookup(IRREGULAR_PAST, &verb) {
        return form.to_string();
    }
    if verb.ends_with('e') {
        format!("{verb}d")
    } else {
        format!("{verb}ed")
    }
}

pub fn is_irregular_present_base(verb: &str) -> bool {
    lookup(IRREGULAR_PRESENT, verb).is_some()
}

pub fn is_irregular_past_base(verb: &str) -> bool {
    lookup(IRREGULAR_PAST, verb).is_some()
}

/// Whether the word already reads as a present participle
pub fn is_present_participle(word: &str) -> bool {
    IRREGULAR_PRESENT.iter().any(|(_, form)| *form == word)
        || (word.ends_with("ing") && !ING_BASE_FORMS.contains(&word))
}

/// Whether the word already reads as a past participle
pub fn is_past_participle(word: &str) -> bool {
    IRREGULAR_PAST.iter().any(|(_, form)| *form == word)
        || (word.ends_with("ed") && !ED_BASE_FORMS.contains(&word))
}
