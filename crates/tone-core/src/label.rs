//! The closed set of tone labels the classifier can emit.

use std::fmt;

use serde::{Serialize, Serializer};

/// A tone label, indexed the way the training run exported them.
///
/// The label text is reproduced verbatim from the training export: every
/// entry carries a leading space, and index 0 carries a trailing period.
/// Index 0 and index 1 are near-duplicates in the training set; both are
/// kept so classifier output always resolves to a defined label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToneLabel {
    /// " Appreciative." - duplicate of [`ToneLabel::Appreciative`] with a
    /// trailing period in the training labels.
    AppreciativePeriod,
    Appreciative,
    Cautionary,
    Diplomatic,
    Direct,
    Informative,
    Inspirational,
    Thoughtful,
    Witty,
    Absurd,
    Accusatory,
    Acerbic,
    Admiring,
    Aggressive,
    Aggrieved,
    Altruistic,
    Ambivalent,
    Amused,
    Angry,
    Animated,
    Apathetic,
    Apologetic,
    Ardent,
    Arrogant,
    Assertive,
    Belligerent,
    Benevolent,
    Bitter,
    Callous,
    Candid,
    Caustic,
}

impl ToneLabel {
    /// Every label, in training-index order.
    pub const ALL: [ToneLabel; 31] = [
        ToneLabel::AppreciativePeriod,
        ToneLabel::Appreciative,
        ToneLabel::Cautionary,
        ToneLabel::Diplomatic,
        ToneLabel::Direct,
        ToneLabel::Informative,
        ToneLabel::Inspirational,
        ToneLabel::Thoughtful,
        ToneLabel::Witty,
        ToneLabel::Absurd,
        ToneLabel::Accusatory,
        ToneLabel::Acerbic,
        ToneLabel::Admiring,
        ToneLabel::Aggressive,
        ToneLabel::Aggrieved,
        ToneLabel::Altruistic,
        ToneLabel::Ambivalent,
        ToneLabel::Amused,
        ToneLabel::Angry,
        ToneLabel::Animated,
        ToneLabel::Apathetic,
        ToneLabel::Apologetic,
        ToneLabel::Ardent,
        ToneLabel::Arrogant,
        ToneLabel::Assertive,
        ToneLabel::Belligerent,
        ToneLabel::Benevolent,
        ToneLabel::Bitter,
        ToneLabel::Callous,
        ToneLabel::Candid,
        ToneLabel::Caustic,
    ];

    /// Number of labels the classifier must be trained against.
    pub const COUNT: usize = Self::ALL.len();

    /// Resolve a training index to its label, if in range.
    pub fn from_index(index: usize) -> Option<ToneLabel> {
        Self::ALL.get(index).copied()
    }

    /// The raw label text as the training export produced it.
    ///
    /// Note the leading space on every entry; downstream prompt and
    /// response formatting depends on reproducing it exactly.
    pub fn as_str(&self) -> &'static str {
        match self {
            ToneLabel::AppreciativePeriod => " Appreciative.",
            ToneLabel::Appreciative => " Appreciative",
            ToneLabel::Cautionary => " Cautionary",
            ToneLabel::Diplomatic => " Diplomatic",
            ToneLabel::Direct => " Direct",
            ToneLabel::Informative => " Informative",
            ToneLabel::Inspirational => " Inspirational",
            ToneLabel::Thoughtful => " Thoughtful",
            ToneLabel::Witty => " Witty",
            ToneLabel::Absurd => " Absurd",
            ToneLabel::Accusatory => " Accusatory",
            ToneLabel::Acerbic => " Acerbic",
            ToneLabel::Admiring => " Admiring",
            ToneLabel::Aggressive => " Aggressive",
            ToneLabel::Aggrieved => " Aggrieved",
            ToneLabel::Altruistic => " Altruistic",
            ToneLabel::Ambivalent => " Ambivalent",
            ToneLabel::Amused => " Amused",
            ToneLabel::Angry => " Angry",
            ToneLabel::Animated => " Animated",
            ToneLabel::Apathetic => " Apathetic",
            ToneLabel::Apologetic => " Apologetic",
            ToneLabel::Ardent => " Ardent",
            ToneLabel::Arrogant => " Arrogant",
            ToneLabel::Assertive => " Assertive",
            ToneLabel::Belligerent => " Belligerent",
            ToneLabel::Benevolent => " Benevolent",
            ToneLabel::Bitter => " Bitter",
            ToneLabel::Callous => " Callous",
            ToneLabel::Candid => " Candid",
            ToneLabel::Caustic => " Caustic",
        }
    }
}

impl fmt::Display for ToneLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Serialized as the raw training text, not the variant name, so a label on
// the wire round-trips with what the classifier was trained against.
impl Serialize for ToneLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
