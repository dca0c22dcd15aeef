use crate::kind::Kind;
use crate::prefix::StylePrefix;
use crate::variables::{Value, VariableStore};

/// Adjusts a found value before it enters a bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// Borders value to its padding tuple.
    Padding,
    /// Keeps image paths and frames, rejects anything else.
    Image,
}

impl Transform {
    fn apply(self, value: Value) -> Option<Value> {
        match (self, value) {
            (Self::Padding, Value::Borders(borders)) => Some(Value::Padding(borders.padding())),
            (Self::Padding, padding @ Value::Padding(_)) => Some(padding),
            (Self::Image, value @ (Value::Text(_) | Value::Frame(_))) => Some(value),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lookup {
    pub key: String,
    pub transform: Option<Transform>,
}

/// Variable names tried in order; the first one that exists decides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FallbackChain {
    steps: Vec<Lookup>,
}

impl FallbackChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn then(mut self, key: impl Into<String>) -> Self {
        self.steps.push(Lookup {
            key: key.into(),
            transform: None,
        });
        self
    }

    pub fn then_with(mut self, key: impl Into<String>, transform: Transform) -> Self {
        self.steps.push(Lookup {
            key: key.into(),
            transform: Some(transform),
        });
        self
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.steps.iter().map(|step| step.key.as_str())
    }

    /// An existing variable whose value the transform rejects ends the chain
    /// with no value; later steps are not consulted.
    pub fn resolve<S: VariableStore + ?Sized>(&self, store: &S) -> Option<Value> {
        for step in &self.steps {
            let Some(value) = store.get(&step.key) else {
                tracing::trace!(key = %step.key, "variable not set");
                continue;
            };
            tracing::trace!(key = %step.key, ?value, "variable found");

            let Some(transform) = step.transform else {
                return Some(value);
            };
            let transformed = transform.apply(value);
            if transformed.is_none() {
                tracing::warn!(key = %step.key, ?transform, "variable has an unusable value; ignoring");
            }
            return transformed;
        }
        None
    }
}

/// Text color states, in bundle order.
pub const TEXT_COLOR_STATES: [StylePrefix; 4] = [
    StylePrefix::Insensitive,
    StylePrefix::Idle,
    StylePrefix::Hover,
    StylePrefix::Selected,
];

/// Every fallback chain a kind needs, built once per resolution.
#[derive(Debug, Clone)]
pub struct KindChains {
    pub background: Option<FallbackChain>,
    pub borders: FallbackChain,
    pub padding: FallbackChain,
    pub xsize: FallbackChain,
    pub ysize: FallbackChain,
    pub tile: FallbackChain,
    pub font: FallbackChain,
    pub size: FallbackChain,
    pub xalign: FallbackChain,
    pub colors: Vec<(StylePrefix, FallbackChain)>,
}

impl KindChains {
    pub fn new(kind: &Kind, fallback_kind: &str) -> Self {
        let shared = |suffix: &str| {
            FallbackChain::new()
                .then(kind.var(suffix))
                .then(format!("{fallback_kind}{suffix}"))
        };
        let own = |suffix: &str| FallbackChain::new().then(kind.var(suffix));

        // Only nvl_button declares its background through a variable.
        let background = kind
            .is("nvl_button")
            .then(|| FallbackChain::new().then_with(kind.var("_background"), Transform::Image));

        let padding = FallbackChain::new()
            .then_with(kind.var("_borders"), Transform::Padding)
            .then_with(format!("{fallback_kind}_borders"), Transform::Padding);

        let colors = TEXT_COLOR_STATES
            .iter()
            .map(|state| (*state, own(&format!("_text_{}color", state.as_str()))))
            .collect();

        Self {
            background,
            borders: shared("_borders"),
            padding,
            xsize: own("_width"),
            ysize: own("_height"),
            tile: shared("_tile"),
            font: own("_text_font"),
            size: own("_text_size"),
            xalign: own("_text_xalign"),
            colors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variables::{Borders, Padding, VariableMap};

    fn kind(raw: &str) -> Kind {
        Kind::parse(raw).expect("valid kind")
    }

    #[test]
    fn first_existing_key_wins_even_when_falsy() {
        let store: VariableMap = [("choice_tile", Value::Bool(false)), ("button_tile", true.into())]
            .into_iter()
            .collect();
        let chain = FallbackChain::new().then("choice_tile").then("button_tile");

        assert_eq!(chain.resolve(&store), Some(Value::Bool(false)));
    }

    #[test]
    fn later_keys_are_used_when_earlier_ones_are_missing() {
        let store: VariableMap = [("button_tile", true)].into_iter().collect();
        let chain = FallbackChain::new().then("choice_tile").then("button_tile");

        assert_eq!(chain.resolve(&store), Some(Value::Bool(true)));
    }

    #[test]
    fn padding_transform_reads_borders_padding() {
        let store: VariableMap = [(
            "button_borders",
            Borders::new(4.0, 4.0, 4.0, 4.0).with_pad(1.0, 0.0, 1.0, 0.0),
        )]
        .into_iter()
        .collect();
        let chain = FallbackChain::new().then_with("button_borders", Transform::Padding);

        assert_eq!(
            chain.resolve(&store),
            Some(Value::Padding(Padding(5.0, 4.0, 5.0, 4.0)))
        );
    }

    #[test]
    fn rejected_value_does_not_fall_through() {
        let store: VariableMap = [
            ("choice_borders", Value::Text("oops".into())),
            ("button_borders", Borders::new(1.0, 1.0, 1.0, 1.0).into()),
        ]
        .into_iter()
        .collect();
        let chain = FallbackChain::new()
            .then_with("choice_borders", Transform::Padding)
            .then_with("button_borders", Transform::Padding);

        assert_eq!(chain.resolve(&store), None);
    }

    #[test]
    fn kind_chains_derive_expected_keys() {
        let chains = KindChains::new(&kind("choice_button"), "button");

        assert_eq!(
            chains.padding.keys().collect::<Vec<_>>(),
            vec!["choice_button_borders", "button_borders"]
        );
        assert_eq!(
            chains.tile.keys().collect::<Vec<_>>(),
            vec!["choice_button_tile", "button_tile"]
        );
        assert_eq!(chains.xsize.keys().collect::<Vec<_>>(), vec!["choice_button_width"]);
        assert_eq!(chains.font.keys().collect::<Vec<_>>(), vec!["choice_button_text_font"]);
        assert!(chains.background.is_none());

        let color_keys: Vec<_> = chains
            .colors
            .iter()
            .flat_map(|(_, chain)| chain.keys().map(str::to_owned).collect::<Vec<_>>())
            .collect();
        assert_eq!(
            color_keys,
            vec![
                "choice_button_text_insensitive_color",
                "choice_button_text_idle_color",
                "choice_button_text_hover_color",
                "choice_button_text_selected_color",
            ]
        );
    }

    #[test]
    fn only_nvl_button_gets_background_variable() {
        let chains = KindChains::new(&kind("nvl_button"), "button");
        let background = chains.background.expect("nvl_button has a background chain");
        assert_eq!(background.keys().collect::<Vec<_>>(), vec!["nvl_button_background"]);

        assert!(KindChains::new(&kind("nvl_button_small"), "button")
            .background
            .is_none());
    }
}
