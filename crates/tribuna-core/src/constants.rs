/// Tribuna core version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Themes that receive the priority bonus. Matched exactly after trimming
/// surrounding whitespace.
pub const PRIORITY_THEMES: [&str; 5] = [
    "Educação",
    "Saúde",
    "Segurança Pública",
    "Meio Ambiente",
    "Direitos Humanos",
];

/// Procedural urgency keywords searched for (case-insensitive) in a
/// proposal's status situation text.
pub const STATUS_PRIORITY_KEYWORDS: [&str; 4] = ["parecer", "urgência", "plenário", "votação"];
