//! Property bundle resolution for button kinds.
//!
//! [`StyleResolver`] turns a kind name into the visual and text bundles a
//! host feeds into its button and button-text styles. Each property comes
//! from a [`FallbackChain`] built once per call by [`KindChains`]; the
//! background image additionally goes through the prefix search of
//! [`crate::prefix`] and [`crate::assets`].

mod chain;
mod error;

pub use chain::{FallbackChain, KindChains, Lookup, Transform, TEXT_COLOR_STATES};
pub use error::{ResolveError, ResolveResult};

use crate::assets::{AssetFs, AssetPathResolver};
use crate::bundle::{
    PropertyBundle, BACKGROUND, COLOR, FONT, LAYOUT, PADDING, SIZE, TEXT_ALIGN, XALIGN, XSIZE, YSIZE,
};
use crate::config::ResolverConfig;
use crate::kind::Kind;
use crate::prefix::{style_prefixes, StylePrefix};
use crate::variables::{Borders, Frame, Value, VariableStore};

const SUBTITLE_LAYOUT: &str = "subtitle";

/// Resolves property bundles against a variable store and an asset tree.
///
/// The resolver only borrows its collaborators and keeps no state between
/// calls; results depend on nothing but the store and asset snapshots seen
/// during the call.
#[derive(Debug)]
pub struct StyleResolver<'a, S: ?Sized, A: ?Sized> {
    store: &'a S,
    assets: &'a A,
    config: ResolverConfig,
}

impl<'a, S, A> StyleResolver<'a, S, A>
where
    S: VariableStore + ?Sized,
    A: AssetFs + ?Sized,
{
    pub fn new(store: &'a S, assets: &'a A) -> Self {
        Self::with_config(store, assets, ResolverConfig::default())
    }

    pub fn with_config(store: &'a S, assets: &'a A, config: ResolverConfig) -> Self {
        Self {
            store,
            assets,
            config: config.normalized(),
        }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// `background`, `padding`, `xsize` and `ysize` for `kind`.
    pub fn visual_properties(&self, kind: &str) -> ResolveResult<PropertyBundle> {
        let kind = parse_kind(kind)?;
        tracing::debug!(%kind, "resolving visual properties");
        let chains = KindChains::new(&kind, &self.config.fallback_kind);

        let borders = match chains.borders.resolve(self.store) {
            Some(Value::Borders(borders)) => Some(borders),
            _ => None,
        };
        let tile = chains
            .tile
            .resolve(self.store)
            .is_some_and(|value| value.is_truthy());

        let mut bundle = PropertyBundle::new();
        bundle.insert_opt(BACKGROUND, self.background(&kind, &chains, borders, tile));
        bundle.insert_opt(PADDING, chains.padding.resolve(self.store));
        bundle.insert_opt(XSIZE, chains.xsize.resolve(self.store));
        bundle.insert_opt(YSIZE, chains.ysize.resolve(self.store));
        Ok(bundle)
    }

    /// `font`, `size`, `xalign`, `text_align`, `layout` and the per-state
    /// colors for `kind`'s text.
    pub fn text_properties(&self, kind: &str) -> ResolveResult<PropertyBundle> {
        let kind = parse_kind(kind)?;
        tracing::debug!(%kind, "resolving text properties");
        let chains = KindChains::new(&kind, &self.config.fallback_kind);

        let mut bundle = PropertyBundle::new();
        bundle.insert_opt(FONT, chains.font.resolve(self.store));
        bundle.insert_opt(SIZE, chains.size.resolve(self.store));

        if let Some(xalign) = chains.xalign.resolve(self.store) {
            let subtitle = xalign
                .as_number()
                .is_some_and(|align| align > 0.0 && align < 1.0);
            bundle.insert(XALIGN, xalign.clone());
            bundle.insert(TEXT_ALIGN, xalign);
            if subtitle {
                bundle.insert(LAYOUT, Value::Text(SUBTITLE_LAYOUT.to_owned()));
            }
        }

        for (state, chain) in &chains.colors {
            let key = format!("{}{}", state.as_str(), COLOR);
            bundle.insert_opt(key, chain.resolve(self.store));
        }
        Ok(bundle)
    }

    /// Per-state background images, keyed `idle_background`,
    /// `hover_background` and so on. States with no image are left out.
    pub fn state_backgrounds(&self, kind: &str) -> ResolveResult<PropertyBundle> {
        let kind = parse_kind(kind)?;
        let prefixes = style_prefixes(&kind, &self.config.fallback_kind);
        let resolver = AssetPathResolver::new(self.assets, &self.config);

        let mut bundle = PropertyBundle::new();
        for state in StylePrefix::ALL.into_iter().filter(|s| *s != StylePrefix::Base) {
            let image = resolver.state_background(&prefixes, state);
            let key = format!("{}{}", state.as_str(), BACKGROUND);
            bundle.insert_opt(key, image.map(Value::Text));
        }
        Ok(bundle)
    }

    fn background(
        &self,
        kind: &Kind,
        chains: &KindChains,
        borders: Option<Borders>,
        tile: bool,
    ) -> Option<Value> {
        let declared = chains
            .background
            .as_ref()
            .and_then(|chain| chain.resolve(self.store));

        let image = match declared {
            Some(Value::Frame(frame)) => return Some(Value::Frame(frame)),
            Some(Value::Text(image)) => image,
            _ => {
                let prefixes = style_prefixes(kind, &self.config.fallback_kind);
                AssetPathResolver::new(self.assets, &self.config).background(&prefixes)?
            }
        };
        tracing::debug!(%kind, image = %image, tile, "resolved background");

        Some(Value::Frame(Frame {
            image,
            borders,
            tile,
        }))
    }
}

fn parse_kind(raw: &str) -> ResolveResult<Kind> {
    Kind::parse(raw).map_err(|reason| {
        tracing::warn!(kind = raw, %reason, "rejecting invalid kind");
        ResolveError::InvalidKind {
            kind: raw.to_owned(),
            reason,
        }
    })
}
