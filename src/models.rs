/// The five-tag vocabulary understood by the `kt` command workflow.
///
/// The vocabulary is closed; user-created custom tags are the only
/// extension mechanism. Declaration order is the fixed display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StandardTag {
    Waifus,
    CollectedSeries,
    Slidetrade,
    Worker,
    Burnburn,
}

impl StandardTag {
    /// Returns the tag name as it appears in commands and export files
    pub fn as_str(&self) -> &'static str {
        match self {
            StandardTag::Waifus => "waifus",
            StandardTag::CollectedSeries => "collected_series",
            StandardTag::Slidetrade => "slidetrade",
            StandardTag::Worker => "worker",
            StandardTag::Burnburn => "burnburn",
        }
    }

    /// Parses a tag name, accepting any casing
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "waifus" => Some(StandardTag::Waifus),
            "collected_series" => Some(StandardTag::CollectedSeries),
            "slidetrade" => Some(StandardTag::Slidetrade),
            "worker" => Some(StandardTag::Worker),
            "burnburn" => Some(StandardTag::Burnburn),
            _ => None,
        }
    }

    /// Returns the whole vocabulary in display order
    pub fn all() -> &'static [StandardTag] {
        &[
            StandardTag::Waifus,
            StandardTag::CollectedSeries,
            StandardTag::Slidetrade,
            StandardTag::Worker,
            StandardTag::Burnburn,
        ]
    }

    /// Button label form: underscores out, upper-cased, e.g. "COLLECTED SERIES"
    pub fn label(&self) -> String {
        self.as_str().replace('_', " ").to_uppercase()
    }
}

/// Worker sub-attributes carried on a card. Stored for display only; the
/// tagging core never interprets them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkerTraits {
    pub effort: u32,
    pub style: String,
    pub purity: String,
    pub grabber: String,
    pub dropper: String,
    pub quickness: String,
    pub toughness: String,
    pub vanity: String,
}

/// One card from a Karuta collection export.
///
/// `code` is an opaque key. The decoder substitutes "Unknown" for missing
/// identity fields and keeps duplicate codes as-is; tag operations address
/// every record sharing a code alike.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardRecord {
    pub code: String,
    pub character: String,
    pub series: String,
    /// Burn ("worth") value used for sorting and currency-style display.
    pub burn_value: f64,
    pub edition: u32,
    pub quality: u32,
    pub dye: String,
    pub frame: String,
    /// Tag column from the export file itself, distinct from the local tag sets.
    pub tag: String,
    pub alias: String,
    pub wishlists: u32,
    pub worker: WorkerTraits,
}

impl CardRecord {
    /// Currency-style burn value, e.g. "409 $". Unparseable values render as "0 $".
    pub fn burn_display(&self) -> String {
        if self.burn_value.is_nan() {
            return "0 $".to_string();
        }
        format!("{} $", self.burn_value.floor() as i64)
    }

    /// One-line list entry: `<burn> $ | <character> (<series>)`
    pub fn list_label(&self) -> String {
        format!("{} | {} ({})", self.burn_display(), self.character, self.series)
    }
}
