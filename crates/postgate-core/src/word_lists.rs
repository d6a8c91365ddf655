//! Built-in word lists and patterns for input screening.
//!
//! These are the defaults behind [`Vocabulary::default`]. Entries are
//! lower-case; detectors match them against normalized input.
//!
//! [`Vocabulary::default`]: crate::vocabulary::Vocabulary

/// Keyboard row and finger-cluster fragments typed when mashing keys.
///
/// Matched against the input with all whitespace removed.
pub const KEYBOARD_FRAGMENTS: &[&str] = &[
    "qwer", "asdf", "zxcv", "wasd", "jkl", "fgh", "uiop", "hjkl", "qaz", "wsx", "edc", "rfv",
    "tgb", "yhn", "ujm",
];

/// Profane or vulgar terms. Matched at a word start, so inflections
/// ("-ing", "-y") are caught as well.
pub const PROFANITY: &[&str] = &[
    "fuck",
    "shit",
    "bitch",
    "asshole",
    "bastard",
    "dick",
    "pussy",
    "whore",
    "slut",
    "nigger",
    "faggot",
    "retard",
    "damn",
    "crap",
    "stfu",
    "wtf",
    "lmao",
    "bullshit",
    "dumbass",
    "motherfucker",
    "idiot",
];

/// High-signal phrases used to override model behaviour or request
/// security-sensitive actions. Matched as plain substrings.
pub const INJECTION_TRIGGERS: &[&str] = &[
    "ignore previous",
    "ignore above",
    "ignore all previous",
    "disregard previous",
    "system prompt",
    "jailbreak",
    "act as",
    "you are now",
    "pretend you",
    "bypass",
    "override",
    "write code",
    "console.log",
    "sql injection",
    "drop table",
    "rm -rf",
    "sudo",
    "malware",
    "virus",
    "exploit",
    "script>",
    "<script",
    "eval(",
    "exec(",
    "import os",
];

/// Question and command openers that are rarely professional content.
///
/// Each entry is a regular expression anchored at the start of input.
pub const QUESTION_PATTERNS: &[&str] = &[
    r"^what (is|are|was|were|does|do|did) ",
    r"^how (to|do|does|did|can|could) (make|cook|bake|solve|fix|calculate)",
    r"^who (is|was|are|were) ",
    r"^where (is|are|was|were|can|do) ",
    r"^when (is|was|did|does|will) ",
    r"^can you (tell|explain|help|write|code|solve|calculate)",
    r"^please (write|code|solve|calculate|explain|tell)",
    r"^(define|translate|convert|calculate|compute|solve) ",
];

/// Career and business vocabulary that exempts a question-shaped topic
/// from the off-topic rule. Each entry is matched as a whole word.
pub const PROFESSIONAL_TERMS: &[&str] = &[
    "career",
    "job",
    "work",
    "startup",
    "business",
    "team",
    "leader",
    "developer",
    "company",
    "hire",
    "fired",
    "growth",
    "revenue",
    "customer",
    "client",
    "marketing",
    "brand",
    "product",
    "skill",
    "interview",
    "salary",
    "promotion",
    "manager",
    "ceo",
    "founder",
    "cto",
    "freelanc",
    "remote",
    "office",
    "tech",
    "software",
    "ai",
    "data",
    "design",
    "ux",
    "saas",
    "b2b",
    "linkedin",
    "network",
    "mentor",
    "intern",
    "build",
    "launch",
    "scale",
    "grow",
    "idea",
    "strategy",
    "industry",
    "innovation",
];

/// Clearly non-professional subjects. Matched as plain substrings.
pub const OFF_TOPIC_KEYWORDS: &[&str] = &[
    "recipe",
    "weather",
    "movie",
    "song",
    "lyrics",
    "anime",
    "manga",
    "game",
    "cheat code",
    "minecraft",
    "fortnite",
    "gta",
    "pokemon",
    "cricket score",
    "football score",
    "horoscope",
    "zodiac",
    "astrology",
    "boyfriend",
    "girlfriend",
    "dating",
    "tinder",
    "crush",
    "love letter",
    "homework",
    "exam answer",
    "momos",
    "biryani",
    "tikka masala",
    "instagram caption",
    "tiktok",
    "snapchat",
    "meme",
    "joke tell",
    "tell me a joke",
    "story time",
    "fairy tale",
    "bedtime story",
    "rap song",
    "poem about love",
    "dear diary",
];

/// Pure programming or debugging requests.
///
/// The first pattern needs a language name followed by a coding word, so
/// "how I used Python at work" is not caught.
pub const CODE_PATTERNS: &[&str] = &[
    r"\b(python|javascript|java|c\+\+|ruby|golang|rust|php|html|css)\b.*\b(code|program|function|script|bug|error|syntax)\b",
    r"\bwrite (a |me )?(code|script|program|function|class|api)\b",
    r"\b(debug|compile|runtime|stack overflow|segfault|npm install)\b",
];

/// Roles, industries and seniority markers accepted as an audience.
///
/// Each entry is a regular-expression fragment matched at a word start with
/// no trailing boundary, so plurals and suffixes pass.
pub const AUDIENCE_TERMS: &[&str] = &[
    "developer",
    "engineer",
    "founder",
    "ceo",
    "cto",
    "cfo",
    "cmo",
    "manager",
    "director",
    "lead",
    "designer",
    "marketer",
    "analyst",
    "consultant",
    "recruiter",
    "freelancer",
    "entrepreneur",
    "executive",
    "professional",
    "student",
    "intern",
    "hr",
    "sales",
    "product",
    "project",
    "coach",
    "mentor",
    "teacher",
    "writer",
    "creator",
    "influencer",
    "investor",
    "partner",
    "vp",
    "head of",
    "team",
    "staff",
    "people",
    "community",
    "audience",
    "leader",
    "architect",
    "scientist",
    "researcher",
    "specialist",
    "strategist",
    "advisor",
    "owner",
    "operator",
    "startup",
    "saas",
    "b2b",
    "b2c",
    "tech",
    "software",
    "ai",
    "data",
    "cloud",
    "fintech",
    "health",
    "edtech",
    "ecommerce",
    "agency",
    "enterprise",
    "smb",
    "small business",
    "senior",
    "junior",
    "mid[- ]?level",
    "entry[- ]?level",
    "marketing",
    "finance",
    "accounting",
    "legal",
    "medical",
    "nursing",
    "pharma",
    "biotech",
    "crypto",
    "web3",
    "blockchain",
    "mobile",
    "frontend",
    "backend",
    "full[- ]?stack",
    "devops",
    "sre",
    "qa",
    "tester",
    "security",
    "infosec",
    "support",
    "success",
    "operations",
    "logistics",
    "supply chain",
    "manufacturing",
    "retail",
    "hospitality",
    "real estate",
    "media",
    "content",
    "seo",
    "growth",
    "brand",
    "vc",
    "angel",
    "pe",
    "private equity",
    "non[- ]?profit",
    "ngo",
    "government",
    "public sector",
    "education",
    "academia",
    "faculty",
];

/// Broad collective nouns accepted as an audience. Whole-word match.
pub const COLLECTIVE_NOUNS: &[&str] = &[
    "people",
    "anyone",
    "those",
    "professionals",
    "leaders",
    "teams",
    "workers",
    "employees",
    "colleagues",
    "individuals",
    "beginners",
    "experts",
    "newcomers",
    "veterans",
    "aspirants",
    "enthusiasts",
    "practitioners",
    "graduates",
    "alumni",
    "candidates",
    "job seekers",
    "hiring managers",
];

/// Connectors of the relational audience shape "`<noun> who ...`".
pub const RELATIONAL_CONNECTORS: &[&str] = &[
    "who",
    "in",
    "at",
    "from",
    "working",
    "looking",
    "interested",
    "building",
    "running",
    "managing",
    "leading",
];
