//! Static knowledge base: every view kind the parser accepts, the tags that
//! spell it, and the attributes each kind understands.  Drives tag lookup,
//! the unknown-attribute policy, and `recast --list-widgets`.

use std::fmt;

use crate::attributes::CONSTRAINT_ATTRIBUTES;

// ── View kinds ────────────────────────────────────────────────────────────

/// The closed set of node kinds.  Declaration order matches [`KINDS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    Text,
    Button,
    EditText,
    Image,
    CheckBox,
    RadioButton,
    Switch,
    RangeSlider,
    Slider,
    View,
    Include,
    Row,
    Column,
    Box,
    LinearLayout,
    RadioGroup,
    Card,
    ScrollView,
    ConstraintLayout,
}

impl ViewKind {
    pub const ALL: [ViewKind; 19] = [
        Self::Text,
        Self::Button,
        Self::EditText,
        Self::Image,
        Self::CheckBox,
        Self::RadioButton,
        Self::Switch,
        Self::RangeSlider,
        Self::Slider,
        Self::View,
        Self::Include,
        Self::Row,
        Self::Column,
        Self::Box,
        Self::LinearLayout,
        Self::RadioGroup,
        Self::Card,
        Self::ScrollView,
        Self::ConstraintLayout,
    ];

    pub fn info(self) -> &'static KindInfo {
        &KINDS[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.info().name
    }

    pub fn is_container(self) -> bool {
        self.info().has_children
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ── Attribute kinds ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrKind {
    /// `16dp`, `14sp`, `@dimen/x`.
    Dimension,
    /// `match_parent`, `wrap_content`, `50%` or a dimension.
    LayoutSize,
    Color,
    /// Color or `@drawable/x`.
    Drawable,
    /// Literal or `@string/x`.
    Text,
    Number,
    Integer,
    Bool,
    Id,
    Gravity,
    /// `a..b` or `[a, b]`.
    Range,
    /// `@type/x` for the given resource type(s).
    Reference(&'static str),
    Enum(&'static [&'static str]),
    /// `|`-separated flags.
    Flags,
    /// `parent` or a sibling id.
    ConstraintTarget,
}

impl fmt::Display for AttrKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dimension => f.write_str("dimension"),
            Self::LayoutSize => f.write_str("size"),
            Self::Color => f.write_str("color"),
            Self::Drawable => f.write_str("drawable"),
            Self::Text => f.write_str("text"),
            Self::Number => f.write_str("number"),
            Self::Integer => f.write_str("integer"),
            Self::Bool => f.write_str("boolean"),
            Self::Id => f.write_str("id"),
            Self::Gravity => f.write_str("gravity"),
            Self::Range => f.write_str("range"),
            Self::Reference(ty) => write!(f, "@{ty}/name"),
            Self::Enum(values) => write!(f, "one of {}", values.join("|")),
            Self::Flags => f.write_str("flags"),
            Self::ConstraintTarget => f.write_str("parent or @id"),
        }
    }
}

// ── Attribute info ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
pub struct AttrInfo {
    pub name: &'static str,
    pub kind: AttrKind,
    pub doc:  &'static str,
}

// ── Kind info ─────────────────────────────────────────────────────────────

pub struct KindInfo {
    pub kind:         ViewKind,
    pub name:         &'static str,
    /// Tags that resolve to this kind; the first is the canonical spelling.
    pub tags:         &'static [&'static str],
    pub doc:          &'static str,
    pub has_children: bool,
    /// Whether [`COMMON_ATTRS`] and the constraint attributes apply.
    pub common:       bool,
    pub attrs:        &'static [AttrInfo],
}

// ── Shared attribute sets ─────────────────────────────────────────────────

const SIDES: &str = "Accepted with suffixes Top, Bottom, Start, End, Left, Right, Horizontal, Vertical.";

pub const COMMON_ATTRS: &[AttrInfo] = &[
    AttrInfo { name: "id",                       kind: AttrKind::Id,         doc: "`@+id/name`; names the node in errors and constraint references." },
    AttrInfo { name: "layout_width",             kind: AttrKind::LayoutSize, doc: "Width. Default `wrap_content`." },
    AttrInfo { name: "layout_height",            kind: AttrKind::LayoutSize, doc: "Height. Default `wrap_content`." },
    AttrInfo { name: "padding",                  kind: AttrKind::Dimension,  doc: SIDES },
    AttrInfo { name: "paddingTop",               kind: AttrKind::Dimension,  doc: "Top padding." },
    AttrInfo { name: "paddingBottom",            kind: AttrKind::Dimension,  doc: "Bottom padding." },
    AttrInfo { name: "paddingStart",             kind: AttrKind::Dimension,  doc: "Start padding; wins over `paddingLeft`." },
    AttrInfo { name: "paddingEnd",               kind: AttrKind::Dimension,  doc: "End padding; wins over `paddingRight`." },
    AttrInfo { name: "paddingLeft",              kind: AttrKind::Dimension,  doc: "Treated as start padding." },
    AttrInfo { name: "paddingRight",             kind: AttrKind::Dimension,  doc: "Treated as end padding." },
    AttrInfo { name: "paddingHorizontal",        kind: AttrKind::Dimension,  doc: "Start and end padding." },
    AttrInfo { name: "paddingVertical",          kind: AttrKind::Dimension,  doc: "Top and bottom padding." },
    AttrInfo { name: "layout_margin",            kind: AttrKind::Dimension,  doc: SIDES },
    AttrInfo { name: "layout_marginTop",         kind: AttrKind::Dimension,  doc: "Top margin." },
    AttrInfo { name: "layout_marginBottom",      kind: AttrKind::Dimension,  doc: "Bottom margin." },
    AttrInfo { name: "layout_marginStart",       kind: AttrKind::Dimension,  doc: "Start margin; wins over `layout_marginLeft`." },
    AttrInfo { name: "layout_marginEnd",         kind: AttrKind::Dimension,  doc: "End margin; wins over `layout_marginRight`." },
    AttrInfo { name: "layout_marginLeft",        kind: AttrKind::Dimension,  doc: "Treated as start margin." },
    AttrInfo { name: "layout_marginRight",       kind: AttrKind::Dimension,  doc: "Treated as end margin." },
    AttrInfo { name: "layout_marginHorizontal",  kind: AttrKind::Dimension,  doc: "Start and end margin." },
    AttrInfo { name: "layout_marginVertical",    kind: AttrKind::Dimension,  doc: "Top and bottom margin." },
    AttrInfo { name: "background",               kind: AttrKind::Drawable,   doc: "Background color or drawable." },
    AttrInfo { name: "visibility",               kind: AttrKind::Enum(&["visible", "invisible", "gone"]), doc: "`gone` views are not emitted; `invisible` ones are fully transparent." },
    AttrInfo { name: "enabled",                  kind: AttrKind::Bool,       doc: "Default `true`. Forwarded to controls that have an `enabled` parameter." },
    AttrInfo { name: "alpha",                    kind: AttrKind::Number,     doc: "Opacity in `0..1`. Default 1." },
    AttrInfo { name: "layout_weight",            kind: AttrKind::Number,     doc: "Share of the remaining space inside a LinearLayout / Row / Column." },
    AttrInfo { name: "layout_gravity",           kind: AttrKind::Gravity,    doc: "Alignment inside the parent." },
    AttrInfo { name: "contentDescription",       kind: AttrKind::Text,       doc: "Accessibility label." },
];

/// Stand-in entry for every `layout_constraint*_to*Of` attribute.
static CONSTRAINT_ATTR: AttrInfo = AttrInfo {
    name: "layout_constraint*_to*Of",
    kind: AttrKind::ConstraintTarget,
    doc:  "Links an edge to `parent` or to a sibling id; honoured inside ConstraintLayout.",
};

const TEXT_ATTRS: &[AttrInfo] = &[
    AttrInfo { name: "text",       kind: AttrKind::Text,      doc: "Displayed text." },
    AttrInfo { name: "textColor",  kind: AttrKind::Color,     doc: "Text color." },
    AttrInfo { name: "textSize",   kind: AttrKind::Dimension, doc: "Font size, usually in `sp`." },
    AttrInfo { name: "textStyle",  kind: AttrKind::Flags,     doc: "`normal`, `bold`, `italic` or `bold|italic`." },
    AttrInfo { name: "fontFamily", kind: AttrKind::Text,      doc: "`sans-serif`, `serif`, `monospace`, `cursive` or `@font/name`." },
    AttrInfo { name: "gravity",    kind: AttrKind::Gravity,   doc: "Horizontal part becomes the text alignment." },
    AttrInfo { name: "maxLines",   kind: AttrKind::Integer,   doc: "Line limit; must be at least 1." },
    AttrInfo { name: "singleLine", kind: AttrKind::Bool,      doc: "Shorthand for a one-line limit." },
];

const TOGGLE_ATTRS: &[AttrInfo] = &[
    AttrInfo { name: "text",    kind: AttrKind::Text, doc: "Label shown next to the control." },
    AttrInfo { name: "checked", kind: AttrKind::Bool, doc: "Initial state. Default `false`." },
];

const RANGE_ATTRS: &[AttrInfo] = &[
    AttrInfo { name: "valueFrom", kind: AttrKind::Number, doc: "Lower bound of the value range. Default 0. Alias: `min`." },
    AttrInfo { name: "min",       kind: AttrKind::Number, doc: "Lower bound of the value range. Default 0." },
    AttrInfo { name: "valueTo",   kind: AttrKind::Number, doc: "Upper bound of the value range. Default 1. Alias: `max`." },
    AttrInfo { name: "max",       kind: AttrKind::Number, doc: "Upper bound of the value range. Default 1." },
    AttrInfo { name: "stepSize",  kind: AttrKind::Number, doc: "Distance between discrete values; must divide the range. 0 means continuous." },
];

const GRAVITY_ATTR: AttrInfo =
    AttrInfo { name: "gravity", kind: AttrKind::Gravity, doc: "Alignment of the children." };

const ORIENTATION_ATTR: AttrInfo =
    AttrInfo { name: "orientation", kind: AttrKind::Enum(&["horizontal", "vertical"]), doc: "Layout direction." };

// ── Kind registry ─────────────────────────────────────────────────────────

pub static KINDS: &[KindInfo] = &[
    // ── Leaves ────────────────────────────────────────────────────────────
    KindInfo {
        kind: ViewKind::Text,
        name: "Text",
        tags: &["TextView", "Text"],
        doc: "A read-only block of text.",
        has_children: false,
        common: true,
        attrs: TEXT_ATTRS,
    },
    KindInfo {
        kind: ViewKind::Button,
        name: "Button",
        tags: &["Button", "com.google.android.material.button.MaterialButton"],
        doc: "A pressable button with a text label.",
        has_children: false,
        common: true,
        attrs: TEXT_ATTRS,
    },
    KindInfo {
        kind: ViewKind::EditText,
        name: "EditText",
        tags: &["EditText", "com.google.android.material.textfield.TextInputEditText"],
        doc: "An editable text field.",
        has_children: false,
        common: true,
        attrs: &[
            TEXT_ATTRS[0], TEXT_ATTRS[1], TEXT_ATTRS[2], TEXT_ATTRS[3],
            TEXT_ATTRS[4], TEXT_ATTRS[5], TEXT_ATTRS[6], TEXT_ATTRS[7],
            AttrInfo { name: "hint",      kind: AttrKind::Text,  doc: "Placeholder shown while empty." },
            AttrInfo { name: "inputType", kind: AttrKind::Flags, doc: "Password and keyboard flags are honoured; others are dropped." },
        ],
    },
    KindInfo {
        kind: ViewKind::Image,
        name: "Image",
        tags: &["ImageView"],
        doc: "A drawable resource.",
        has_children: false,
        common: true,
        attrs: &[
            AttrInfo { name: "src",       kind: AttrKind::Reference("drawable"), doc: "Image resource. Required (or `srcCompat`)." },
            AttrInfo { name: "srcCompat", kind: AttrKind::Reference("drawable"), doc: "Image resource. Used when `src` is absent." },
            AttrInfo { name: "scaleType", kind: AttrKind::Enum(&["fitCenter", "centerCrop", "fitXY", "center", "centerInside"]), doc: "How the image fills its bounds. Default `fitCenter`." },
        ],
    },
    KindInfo {
        kind: ViewKind::CheckBox,
        name: "CheckBox",
        tags: &["CheckBox"],
        doc: "A checkbox, optionally labelled.",
        has_children: false,
        common: true,
        attrs: TOGGLE_ATTRS,
    },
    KindInfo {
        kind: ViewKind::RadioButton,
        name: "RadioButton",
        tags: &["RadioButton"],
        doc: "A radio button, optionally labelled.",
        has_children: false,
        common: true,
        attrs: TOGGLE_ATTRS,
    },
    KindInfo {
        kind: ViewKind::Switch,
        name: "Switch",
        tags: &["Switch", "androidx.appcompat.widget.SwitchCompat"],
        doc: "An on/off switch, optionally labelled.",
        has_children: false,
        common: true,
        attrs: TOGGLE_ATTRS,
    },
    KindInfo {
        kind: ViewKind::RangeSlider,
        name: "RangeSlider",
        tags: &["RangeSlider", "com.google.android.material.slider.RangeSlider"],
        doc: "A slider with two thumbs selecting a sub-range.",
        has_children: false,
        common: true,
        attrs: &[
            RANGE_ATTRS[0], RANGE_ATTRS[1], RANGE_ATTRS[2], RANGE_ATTRS[3], RANGE_ATTRS[4],
            AttrInfo { name: "values", kind: AttrKind::Range, doc: "Initial thumb positions. Default: the whole range." },
        ],
    },
    KindInfo {
        kind: ViewKind::Slider,
        name: "Slider",
        tags: &["Slider", "SeekBar", "com.google.android.material.slider.Slider"],
        doc: "A single-thumb slider.",
        has_children: false,
        common: true,
        attrs: &[
            RANGE_ATTRS[0], RANGE_ATTRS[1], RANGE_ATTRS[2], RANGE_ATTRS[3], RANGE_ATTRS[4],
            AttrInfo { name: "value",    kind: AttrKind::Number, doc: "Initial position. Default: the lower bound. Alias: `progress`." },
            AttrInfo { name: "progress", kind: AttrKind::Number, doc: "Initial position." },
        ],
    },
    KindInfo {
        kind: ViewKind::View,
        name: "View",
        tags: &["View", "Space"],
        doc: "An empty box: dividers, spacers, colored blocks.",
        has_children: false,
        common: true,
        attrs: &[],
    },
    KindInfo {
        kind: ViewKind::Include,
        name: "Include",
        tags: &["include"],
        doc: "Calls the composable generated for another layout file.",
        has_children: false,
        common: false,
        attrs: &[
            AttrInfo { name: "layout",     kind: AttrKind::Reference("layout"), doc: "The included layout. Required." },
            COMMON_ATTRS[0],
            AttrInfo { name: "visibility", kind: AttrKind::Enum(&["visible", "invisible", "gone"]), doc: "`gone` drops the call." },
        ],
    },

    // ── Containers ────────────────────────────────────────────────────────
    KindInfo {
        kind: ViewKind::Row,
        name: "Row",
        tags: &["Row"],
        doc: "Children laid out horizontally.",
        has_children: true,
        common: true,
        attrs: &[GRAVITY_ATTR],
    },
    KindInfo {
        kind: ViewKind::Column,
        name: "Column",
        tags: &["Column"],
        doc: "Children laid out vertically.",
        has_children: true,
        common: true,
        attrs: &[GRAVITY_ATTR],
    },
    KindInfo {
        kind: ViewKind::Box,
        name: "Box",
        tags: &["Box", "FrameLayout"],
        doc: "Children stacked on top of each other.",
        has_children: true,
        common: true,
        attrs: &[GRAVITY_ATTR],
    },
    KindInfo {
        kind: ViewKind::LinearLayout,
        name: "LinearLayout",
        tags: &["LinearLayout"],
        doc: "A Row or a Column depending on `orientation` (default horizontal).",
        has_children: true,
        common: true,
        attrs: &[GRAVITY_ATTR, ORIENTATION_ATTR],
    },
    KindInfo {
        kind: ViewKind::RadioGroup,
        name: "RadioGroup",
        tags: &["RadioGroup"],
        doc: "A selectable group of radio buttons (default vertical).",
        has_children: true,
        common: true,
        attrs: &[GRAVITY_ATTR, ORIENTATION_ATTR],
    },
    KindInfo {
        kind: ViewKind::Card,
        name: "Card",
        tags: &[
            "CardView",
            "androidx.cardview.widget.CardView",
            "com.google.android.material.card.MaterialCardView",
        ],
        doc: "A raised surface with rounded corners.",
        has_children: true,
        common: true,
        attrs: &[
            AttrInfo { name: "cardCornerRadius",    kind: AttrKind::Dimension, doc: "Corner radius." },
            AttrInfo { name: "cardBackgroundColor", kind: AttrKind::Color,     doc: "Surface color." },
            AttrInfo { name: "cardElevation",       kind: AttrKind::Dimension, doc: "Shadow elevation." },
        ],
    },
    KindInfo {
        kind: ViewKind::ScrollView,
        name: "ScrollView",
        tags: &["ScrollView", "HorizontalScrollView", "androidx.core.widget.NestedScrollView"],
        doc: "Scrolls exactly one child; `HorizontalScrollView` scrolls sideways.",
        has_children: true,
        common: true,
        attrs: &[],
    },
    KindInfo {
        kind: ViewKind::ConstraintLayout,
        name: "ConstraintLayout",
        tags: &["ConstraintLayout", "androidx.constraintlayout.widget.ConstraintLayout"],
        doc: "Children positioned by `layout_constraint*` links.",
        has_children: true,
        common: true,
        attrs: &[],
    },
];

// ── Lookups ───────────────────────────────────────────────────────────────

pub fn kind_for_tag(tag: &str) -> Option<ViewKind> {
    KINDS.iter().find(|k| k.tags.contains(&tag)).map(|k| k.kind)
}

/// The catalog entry for `attr` on `kind`, or `None` when the attribute is
/// outside that kind's vocabulary.
pub fn attr_for_kind(kind: ViewKind, attr: &str) -> Option<&'static AttrInfo> {
    let info = kind.info();
    if let Some(a) = info.attrs.iter().find(|a| a.name == attr) {
        return Some(a);
    }
    if !info.common {
        return None;
    }
    if let Some(a) = COMMON_ATTRS.iter().find(|a| a.name == attr) {
        return Some(a);
    }
    CONSTRAINT_ATTRIBUTES.iter().any(|(name, _, _)| *name == attr).then_some(&CONSTRAINT_ATTR)
}
