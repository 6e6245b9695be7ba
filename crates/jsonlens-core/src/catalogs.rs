use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Static synonym table: normalized word → related search words.
pub type SynonymTable = HashMap<&'static str, &'static [&'static str]>;

/// Static set of words that never take part in matching.
pub type StopwordSet = HashSet<&'static str>;

/// Icon used whenever no confident match exists.
pub const DEFAULT_ICON: &str = "more-horizontal";

/// Labels shorter than this (after trimming) skip matching entirely.
pub const MIN_LABEL_CHARS: usize = 2;

/// Score for a term contained anywhere in the hyphen-stripped icon name.
pub const SUBSTRING_SCORE: u32 = 1;

/// Extra score for a term equal to a whole hyphen-delimited segment.
pub const SEGMENT_SCORE: u32 = 2;

/// A fuzzy candidate is accepted when its edit distance is at most
/// `ceil(FUZZY_MAX_DISTANCE_RATIO * longer_len)`.
pub const FUZZY_MAX_DISTANCE_RATIO: f64 = 0.5;

/// Normalized dissimilarity (`distance / longer_len`) below which a fuzzy
/// candidate counts as a confident match.
pub const FUZZY_SCORE_CUTOFF: f64 = 0.4;

/// Built-in icon catalog, sorted ascending (byte order).
/// Names follow the lucide icon set.
pub static ICON_NAMES: &[&str] = &[
    "activity",
    "airplay",
    "alarm-clock",
    "album",
    "alert-circle",
    "alert-triangle",
    "align-center",
    "align-justify",
    "align-left",
    "align-right",
    "anchor",
    "aperture",
    "apple",
    "archive",
    "armchair",
    "arrow-down",
    "arrow-left",
    "arrow-right",
    "arrow-up",
    "at-sign",
    "atom",
    "award",
    "axe",
    "baby",
    "backpack",
    "badge",
    "badge-check",
    "badge-dollar-sign",
    "badge-percent",
    "baggage-claim",
    "ball",
    "banana",
    "banknote",
    "bar-chart",
    "barcode",
    "baseline",
    "bath",
    "battery",
    "battery-charging",
    "beaker",
    "bean",
    "bed",
    "beer",
    "bell",
    "bell-ring",
    "bike",
    "binary",
    "bird",
    "bitcoin",
    "bluetooth",
    "bold",
    "bomb",
    "bone",
    "book",
    "book-open",
    "book-user",
    "bookmark",
    "bot",
    "box",
    "boxes",
    "brain",
    "briefcase",
    "brush",
    "bug",
    "building",
    "building-2",
    "bus",
    "cake",
    "calculator",
    "calendar",
    "calendar-check",
    "calendar-clock",
    "calendar-days",
    "calendar-heart",
    "calendar-range",
    "camera",
    "car",
    "carrot",
    "cast",
    "cat",
    "check",
    "check-circle",
    "chef-hat",
    "cherry",
    "chevron-down",
    "chevron-right",
    "church",
    "cigarette",
    "circle",
    "circle-dollar-sign",
    "circle-user",
    "citrus",
    "clipboard",
    "clipboard-list",
    "clock",
    "cloud",
    "cloud-rain",
    "cloud-sun",
    "code",
    "coffee",
    "cog",
    "coins",
    "compass",
    "component",
    "construction",
    "contact",
    "container",
    "cookie",
    "copy",
    "copyright",
    "cpu",
    "credit-card",
    "crop",
    "crown",
    "cup-soda",
    "database",
    "delete",
    "diamond",
    "dice-5",
    "divide",
    "dna",
    "dog",
    "dollar-sign",
    "door-open",
    "dot",
    "download",
    "droplet",
    "droplets",
    "drum",
    "dumbbell",
    "ear",
    "edit",
    "egg",
    "equal",
    "euro",
    "eye",
    "eye-off",
    "factory",
    "fan",
    "feather",
    "file",
    "file-text",
    "film",
    "filter",
    "fingerprint",
    "fish",
    "flag",
    "flame",
    "flask-conical",
    "flower",
    "flower-2",
    "folder",
    "footprints",
    "fuel",
    "gamepad-2",
    "gauge",
    "gavel",
    "gem",
    "gift",
    "git-branch",
    "glasses",
    "globe",
    "goal",
    "graduation-cap",
    "grape",
    "grid",
    "group",
    "hammer",
    "hand",
    "hand-coins",
    "handshake",
    "hard-drive",
    "hash",
    "hat-glasses",
    "headphones",
    "heart",
    "heart-pulse",
    "help-circle",
    "hexagon",
    "highlighter",
    "history",
    "home",
    "hospital",
    "hotel",
    "hourglass",
    "house",
    "ice-cream",
    "id-card",
    "image",
    "inbox",
    "infinity",
    "info",
    "italic",
    "key",
    "keyboard",
    "lamp",
    "landmark",
    "languages",
    "laptop",
    "layers",
    "layout",
    "leaf",
    "library",
    "lightbulb",
    "line-chart",
    "link",
    "list",
    "list-checks",
    "list-ordered",
    "loader",
    "lock",
    "log-in",
    "log-out",
    "luggage",
    "mail",
    "mail-open",
    "mailbox",
    "map",
    "map-pin",
    "martini",
    "maximize",
    "medal",
    "megaphone",
    "message-circle",
    "message-square",
    "mic",
    "microscope",
    "milk",
    "minus",
    "monitor",
    "moon",
    "more-horizontal",
    "more-vertical",
    "mountain",
    "mouse",
    "move",
    "music",
    "music-2",
    "navigation",
    "network",
    "newspaper",
    "notebook",
    "nut",
    "octagon",
    "package",
    "paint-bucket",
    "palette",
    "paperclip",
    "party-popper",
    "pause",
    "pen",
    "pencil",
    "percent",
    "person-standing",
    "phone",
    "phone-call",
    "pie-chart",
    "piggy-bank",
    "pill",
    "pin",
    "pizza",
    "plane",
    "play",
    "plug",
    "plus",
    "pocket",
    "podcast",
    "power",
    "printer",
    "puzzle",
    "qr-code",
    "quote",
    "radio",
    "receipt",
    "recycle",
    "refresh-cw",
    "repeat",
    "reply",
    "rocket",
    "rotate-cw",
    "route",
    "rss",
    "ruler",
    "sailboat",
    "save",
    "scale",
    "scan",
    "school",
    "scissors",
    "search",
    "send",
    "server",
    "settings",
    "shapes",
    "share",
    "share-2",
    "shield",
    "shield-check",
    "ship",
    "shirt",
    "shopping-bag",
    "shopping-cart",
    "shuffle",
    "signal",
    "signpost",
    "siren",
    "skull",
    "slash",
    "sliders",
    "smartphone",
    "smile",
    "snowflake",
    "sofa",
    "sparkles",
    "speaker",
    "square",
    "stamp",
    "star",
    "stethoscope",
    "sticky-note",
    "store",
    "sun",
    "sunrise",
    "sunset",
    "syringe",
    "table",
    "tablet",
    "tag",
    "tags",
    "target",
    "tent",
    "terminal",
    "text",
    "thermometer",
    "thermometer-sun",
    "thumbs-up",
    "ticket",
    "timer",
    "toggle-left",
    "toggle-right",
    "tool-case",
    "tractor",
    "traffic-cone",
    "train",
    "trash",
    "trash-2",
    "tree-pine",
    "trees",
    "trending-down",
    "trending-up",
    "trophy",
    "truck",
    "tv",
    "type",
    "umbrella",
    "university",
    "unlock",
    "upload",
    "usb",
    "user",
    "user-check",
    "user-cog",
    "user-plus",
    "user-round",
    "users",
    "utensils",
    "utensils-crossed",
    "vault",
    "vegan",
    "venus-and-mars",
    "video",
    "vote",
    "wallet",
    "wand",
    "watch",
    "waves",
    "weight",
    "wheat",
    "wifi",
    "wind",
    "wine",
    "wrench",
    "x",
    "zap",
];

/// Built-in synonym table.
pub static SYNONYMS: LazyLock<SynonymTable> = LazyLock::new(|| {
    let mut m: SynonymTable = HashMap::new();
    // Identity
    m.insert("id", &["identification", "number", "hash", "fingerprint"]);
    m.insert("identification", &["identity", "id", "profile"]);
    m.insert("uuid", &["fingerprint", "hash", "key"]);
    m.insert("name", &["user", "round", "contact"]);
    m.insert("username", &["user", "contact"]);
    m.insert("password", &["lock", "key", "shield"]);
    m.insert("token", &["key", "lock"]);
    // People
    m.insert("age", &["years", "birthday", "birth", "baby"]);
    m.insert("gender", &["sex", "male", "female", "venus", "mars", "user"]);
    m.insert("sex", &["gender", "user"]);
    m.insert("education", &["school", "degree", "graduation", "academic", "book"]);
    m.insert("occupation", &["job", "work", "briefcase"]);
    m.insert("job", &["work", "briefcase"]);
    m.insert("friends", &["users", "group"]);
    m.insert("children", &["baby", "users"]);
    // Money
    m.insert(
        "income",
        &["money", "salary", "cash", "dollar", "currency", "banknote", "hand", "coins"],
    );
    m.insert("salary", &["money", "banknote", "wallet"]);
    m.insert("price", &["tag", "dollar", "receipt"]);
    m.insert("cost", &["dollar", "receipt", "coins"]);
    m.insert("balance", &["wallet", "scale", "coins"]);
    m.insert("payment", &["card", "wallet", "receipt"]);
    // Time
    m.insert("timestamp", &["time", "date", "calendar", "clock"]);
    m.insert("date", &["calendar", "days"]);
    m.insert("created", &["calendar", "clock"]);
    m.insert("updated", &["history", "clock"]);
    m.insert("duration", &["timer", "hourglass"]);
    m.insert("birthday", &["cake", "gift", "party"]);
    // Places
    m.insert("location", &["place", "address", "city", "map", "pin"]);
    m.insert("address", &["map", "pin", "house"]);
    m.insert("country", &["globe", "flag"]);
    m.insert("city", &["building", "landmark"]);
    m.insert("coordinates", &["map", "pin", "compass"]);
    // Contact
    m.insert("email", &["mail", "envelope"]);
    m.insert("phone", &["smartphone", "call"]);
    m.insert("website", &["globe", "link"]);
    m.insert("url", &["link", "globe"]);
    // Politics and groups
    m.insert("political", &["government", "vote", "party", "ballot"]);
    m.insert("affiliation", &["membership", "group", "association"]);
    m.insert("support", &["vote", "backing", "help"]);
    m.insert("party", &["group", "political", "vote"]);
    m.insert("liberal", &["political", "party", "vote"]);
    m.insert("labour", &["political", "party", "vote"]);
    // Media and misc
    m.insert("song", &["music", "headphones"]);
    m.insert("favorite", &["heart", "star"]);
    m.insert("rating", &["star", "award"]);
    m.insert("score", &["trophy", "star", "target"]);
    m.insert("photo", &["image", "camera"]);
    m.insert("avatar", &["image", "user"]);
    m.insert("language", &["languages", "globe"]);
    m.insert("status", &["activity", "check", "signal"]);
    m.insert("active", &["check", "toggle", "power"]);
    m.insert("enabled", &["check", "toggle", "power"]);
    m.insert("count", &["hash", "calculator"]);
    m.insert("total", &["calculator", "sigma"]);
    m.insert("color", &["palette", "brush"]);
    m.insert("weight", &["scale", "dumbbell"]);
    m.insert("height", &["ruler"]);
    m.insert("description", &["text", "file"]);
    m.insert("notes", &["notebook", "sticky"]);
    m.insert("tags", &["tag"]);
    m
});

/// Articles, prepositions and conjunctions excluded from matching.
pub static STOPWORDS: LazyLock<StopwordSet> = LazyLock::new(|| {
    let mut s = HashSet::new();
    s.insert("a");
    s.insert("an");
    s.insert("and");
    s.insert("or");
    s.insert("the");
    s.insert("of");
    s.insert("in");
    s.insert("to");
    s.insert("for");
    s.insert("with");
    s.insert("on");
    s.insert("at");
    s.insert("by");
    s.insert("from");
    s.insert("up");
    s.insert("about");
    s.insert("than");
    s
});

/// Strings recognised as a gender value (after lower-casing and trimming).
pub const GENDER_VALUES: &[&str] = &["male", "female", "non-binary"];
