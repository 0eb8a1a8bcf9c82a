use relnorm_core::constants::SYMMETRIC_LOOKUP_KEYS;
use relnorm_core::models::{Category, InversePair, Taxonomy, VariantAlias};

pub const BUILTIN_VERSION: &str = "builtin-1";

/// Canonical labels. Declaration order is match priority for the substring stage.
const CANONICAL_TYPES: &[&str] = &[
    // AI/ML
    "TRAINS_MODEL",
    "USES_EMBEDDINGS",
    "GENERATES_RESPONSE",
    "QUERIES_LLM",
    "FINE_TUNES",
    "PROMPTS",
    "VECTORIZES",
    "SEMANTIC_SEARCH",
    "AUGMENTS_DATA",
    // API & integration
    "CALLS_API",
    "EXPOSES_ENDPOINT",
    "INTEGRATES_WITH",
    "WEBHOOKS_TO",
    "SUBSCRIBES_TO",
    "PUBLISHES_TO",
    "AUTHENTICATES_WITH",
    "RATE_LIMITS",
    "PROXIES_TO",
    // Frontend
    "RENDERS_COMPONENT",
    "MANAGES_STATE",
    "ROUTES_TO",
    "DISPLAYS_DATA",
    "HANDLES_EVENT",
    "STYLES_WITH",
    "ANIMATES",
    "RESPONSIVE_TO",
    "LAZY_LOADS",
    // Backend
    "PROCESSES_REQUEST",
    "QUERIES_DATABASE",
    "CACHES_IN",
    "VALIDATES_DATA",
    "TRANSFORMS_DATA",
    "SCHEDULES_JOB",
    "QUEUES_TASK",
    "LOGS_TO",
    "MONITORS",
    // Data flow
    "READS_FROM",
    "WRITES_TO",
    "STREAMS_DATA",
    "BATCHES_DATA",
    "AGGREGATES",
    "FILTERS",
    "MAPS_TO",
    "REDUCES_TO",
    "PIPELINES_THROUGH",
    // Architecture & infrastructure
    "DEPLOYS_TO",
    "CONTAINERIZED_IN",
    "ORCHESTRATES",
    "LOAD_BALANCES",
    "SCALES_WITH",
    "HOSTED_ON",
    "BACKED_BY",
    "REPLICATES_TO",
    "FAILOVER_TO",
    // Development process
    "DEPENDS_ON",
    "EXTENDS",
    "IMPLEMENTS",
    "INHERITS_FROM",
    "COMPOSES",
    "DECORATES",
    "MOCKS",
    "TESTS",
    "DEBUGS",
    // Automation
    "AUTOMATES",
    "TRIGGERS",
    "SCHEDULES",
    "ORCHESTRATES_WORKFLOW",
    "CHAINS_TO",
    "BRANCHES_TO",
    "RETRIES_ON",
    "ROLLBACK_TO",
    "NOTIFIES",
    // Security & auth
    "AUTHORIZES",
    "ENCRYPTS",
    "SIGNS_WITH",
    "VALIDATES_TOKEN",
    "GRANTS_ACCESS",
    "REVOKES_ACCESS",
    "AUDITS",
    "SECURES",
    // Version control & CI/CD
    "COMMITS_TO",
    "MERGES_INTO",
    "BRANCHES_FROM",
    "TAGS_AS",
    "BUILDS_FROM",
    "PACKAGES_AS",
    "RELEASES_TO",
    "ROLLBACKS_FROM",
    // Documentation & knowledge
    "DOCUMENTS",
    "REFERENCES",
    "ANNOTATES",
    "EXAMPLES_OF",
    "TUTORIALS_FOR",
    "MIGRATES_FROM",
    "DEPRECATED_BY",
    "REPLACES",
    // Performance & optimization
    "OPTIMIZES",
    "INDEXES",
    "COMPRESSES",
    "MINIFIES",
    "BUNDLES_WITH",
    "LAZY_EVALUATES",
    "MEMOIZES",
    "PARALLELIZES",
    // Generic
    "RELATED",
    "CONNECTED_TO",
    "ASSOCIATED_WITH",
    "PART_OF",
    "CONTAINS",
    "BELONGS_TO",
];

/// Phrases extraction models commonly emit, mapped to canonical labels.
const VARIANTS: &[(&str, &str)] = &[
    // AI/ML
    ("uses ai", "USES_EMBEDDINGS"),
    ("ai powered", "USES_EMBEDDINGS"),
    ("machine learning", "TRAINS_MODEL"),
    ("calls gpt", "QUERIES_LLM"),
    ("uses llm", "QUERIES_LLM"),
    ("generates with ai", "GENERATES_RESPONSE"),
    // API
    ("api call", "CALLS_API"),
    ("makes request to", "CALLS_API"),
    ("posts to", "CALLS_API"),
    ("gets from", "CALLS_API"),
    ("fetches from", "CALLS_API"),
    ("sends webhook", "WEBHOOKS_TO"),
    ("listens to", "SUBSCRIBES_TO"),
    ("broadcasts to", "PUBLISHES_TO"),
    // Frontend
    ("displays", "DISPLAYS_DATA"),
    ("shows", "DISPLAYS_DATA"),
    ("renders", "RENDERS_COMPONENT"),
    ("handles click", "HANDLES_EVENT"),
    ("on click", "HANDLES_EVENT"),
    ("styled with", "STYLES_WITH"),
    ("uses css", "STYLES_WITH"),
    ("navigates to", "ROUTES_TO"),
    // Backend
    ("processes", "PROCESSES_REQUEST"),
    ("handles request", "PROCESSES_REQUEST"),
    ("queries", "QUERIES_DATABASE"),
    ("selects from", "QUERIES_DATABASE"),
    ("inserts into", "WRITES_TO"),
    ("updates", "WRITES_TO"),
    ("deletes from", "WRITES_TO"),
    ("caches", "CACHES_IN"),
    // Data flow
    ("reads", "READS_FROM"),
    ("writes", "WRITES_TO"),
    ("saves to", "WRITES_TO"),
    ("loads from", "READS_FROM"),
    ("imports from", "READS_FROM"),
    ("exports to", "WRITES_TO"),
    ("transforms", "TRANSFORMS_DATA"),
    ("converts", "TRANSFORMS_DATA"),
    // Architecture
    ("deployed on", "DEPLOYS_TO"),
    ("runs on", "HOSTED_ON"),
    ("hosted by", "HOSTED_ON"),
    ("uses database", "BACKED_BY"),
    ("backed by", "BACKED_BY"),
    ("dockerized", "CONTAINERIZED_IN"),
    ("in container", "CONTAINERIZED_IN"),
    // Development
    ("requires", "DEPENDS_ON"),
    ("needs", "DEPENDS_ON"),
    ("uses", "DEPENDS_ON"),
    ("based on", "EXTENDS"),
    ("built on", "EXTENDS"),
    ("implements interface", "IMPLEMENTS"),
    ("tested by", "TESTS"),
    ("unit test", "TESTS"),
    // Automation
    ("automated by", "AUTOMATES"),
    ("triggers when", "TRIGGERS"),
    ("runs after", "CHAINS_TO"),
    ("follows", "CHAINS_TO"),
    ("notifies via", "NOTIFIES"),
    ("alerts", "NOTIFIES"),
    // Generic
    ("related to", "RELATED"),
    ("is related to", "RELATED"),
    ("connected with", "CONNECTED_TO"),
    ("is part of", "PART_OF"),
    ("includes", "CONTAINS"),
    ("has", "CONTAINS"),
];

/// Inverse pairs by lookup key. Pairs naming keys the registry lacks are skipped.
const INVERSE_PAIRS: &[(&str, &str)] = &[
    // API/integration
    ("calls api", "exposes endpoint"),
    ("subscribes to", "publishes to"),
    ("webhooks to", "receives webhook from"),
    // Data flow
    ("reads from", "read by"),
    ("writes to", "written by"),
    ("streams data", "receives stream"),
    // Architecture
    ("deploys to", "hosts"),
    ("depends on", "required by"),
    ("extends", "extended by"),
    ("implements", "implemented by"),
    // Frontend/backend
    ("renders component", "rendered by"),
    ("displays data", "displayed by"),
    ("processes request", "processed by"),
    ("queries database", "queried by"),
    // Automation
    ("triggers", "triggered by"),
    ("automates", "automated by"),
    ("chains to", "chained from"),
    // Development
    ("tests", "tested by"),
    ("documents", "documented by"),
    ("replaces", "replaced by"),
    ("migrates from", "migrates to"),
    // Structure
    ("contains", "part of"),
    ("composes", "composed by"),
    ("inherits from", "inherited by"),
];

const CATEGORIES: &[(&str, &[&str])] = &[
    (
        "ai_ml",
        &[
            "trains model",
            "uses embeddings",
            "generates response",
            "queries llm",
            "fine tunes",
            "prompts",
            "vectorizes",
            "semantic search",
            "augments data",
        ],
    ),
    (
        "api",
        &[
            "calls api",
            "exposes endpoint",
            "integrates with",
            "webhooks to",
            "subscribes to",
            "publishes to",
            "authenticates with",
            "rate limits",
            "proxies to",
        ],
    ),
    (
        "frontend",
        &[
            "renders component",
            "manages state",
            "routes to",
            "displays data",
            "handles event",
            "styles with",
            "animates",
            "responsive to",
            "lazy loads",
        ],
    ),
    (
        "backend",
        &[
            "processes request",
            "queries database",
            "caches in",
            "validates data",
            "transforms data",
            "schedules job",
            "queues task",
            "logs to",
            "monitors",
        ],
    ),
    (
        "data",
        &[
            "reads from",
            "writes to",
            "streams data",
            "batches data",
            "aggregates",
            "filters",
            "maps to",
            "reduces to",
            "pipelines through",
        ],
    ),
    (
        "architecture",
        &[
            "deploys to",
            "containerized in",
            "orchestrates",
            "load balances",
            "scales with",
            "hosted on",
            "backed by",
            "replicates to",
            "failover to",
        ],
    ),
    (
        "development",
        &[
            "depends on",
            "extends",
            "implements",
            "inherits from",
            "composes",
            "decorates",
            "mocks",
            "tests",
            "debugs",
        ],
    ),
    (
        "automation",
        &[
            "automates",
            "triggers",
            "schedules",
            "orchestrates workflow",
            "chains to",
            "branches to",
            "retries on",
            "rollback to",
            "notifies",
        ],
    ),
    (
        "security",
        &[
            "authorizes",
            "encrypts",
            "signs with",
            "validates token",
            "grants access",
            "revokes access",
            "audits",
            "secures",
        ],
    ),
    (
        "vcs",
        &[
            "commits to",
            "merges into",
            "branches from",
            "tags as",
            "builds from",
            "packages as",
            "releases to",
            "rollbacks from",
        ],
    ),
    (
        "docs",
        &[
            "documents",
            "references",
            "annotates",
            "examples of",
            "tutorials for",
            "migrates from",
            "deprecated by",
            "replaces",
        ],
    ),
    (
        "performance",
        &[
            "optimizes",
            "indexes",
            "compresses",
            "minifies",
            "bundles with",
            "lazy evaluates",
            "memoizes",
            "parallelizes",
        ],
    ),
];

/// The compiled-in taxonomy.
pub fn builtin() -> Taxonomy {
    Taxonomy {
        version: BUILTIN_VERSION.to_string(),
        canonical_types: CANONICAL_TYPES.iter().map(|t| (*t).to_string()).collect(),
        variants: VARIANTS
            .iter()
            .map(|(phrase, canonical)| VariantAlias {
                phrase: (*phrase).to_string(),
                canonical: (*canonical).to_string(),
            })
            .collect(),
        inverse_pairs: INVERSE_PAIRS
            .iter()
            .map(|(forward, reverse)| InversePair {
                forward: (*forward).to_string(),
                reverse: (*reverse).to_string(),
            })
            .collect(),
        bidirectional: SYMMETRIC_LOOKUP_KEYS.iter().map(|k| (*k).to_string()).collect(),
        categories: CATEGORIES
            .iter()
            .map(|(name, keys)| Category::new(*name, keys))
            .collect(),
    }
}
