//! Stack layout: which cards are drawn, in what order, and how each layer is
//! offset and scaled.
//!
//! [`StackRenderer::layout`] is a pure function of an
//! [`InteractionSnapshot`], the configuration and the deck length; call it
//! after every state change. [`StackRenderer::compose`] pairs a layout with
//! host-produced views.

use cardstack_model::{Deck, Translation};

use crate::config::CardStackConfig;
use crate::engine::InteractionSnapshot;

/// Placement of one visible card. Scale is anchored at the card's bottom
/// edge.
#[derive(Debug, Clone, PartialEq)]
pub struct CardLayout<D> {
    /// Deck position of the card.
    pub index: usize,
    /// Steps behind the top card; 0 for the top card.
    pub relative: usize,
    /// Higher values draw above lower ones.
    pub z_index: f64,
    /// Downward offset, `relative * card_offset`.
    pub offset_y: f32,
    /// Uniform scale, never negative.
    pub scale: f32,
    /// Live drag offset; always zero below the top card.
    pub translation: Translation,
    /// True for the card at the cursor.
    pub is_top: bool,
    /// In-progress direction; only ever set on the top card.
    pub direction: Option<D>,
}

impl<D> CardLayout<D> {
    /// Rotation feedback for content, in degrees within `[0, 360)`.
    pub fn angle_degrees(&self) -> f64 {
        self.translation.angle_degrees()
    }
}

/// Placement of the "no more cards" view, always beneath the stack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaceholderLayout {
    /// Grows to 1 as the deck empties.
    pub scale: f32,
    /// Below every card.
    pub z_index: f64,
}

/// Placement of everything drawn for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct StackLayout<D> {
    /// The empty-state view.
    pub placeholder: PlaceholderLayout,
    /// Back to front: the top card is last.
    pub cards: Vec<CardLayout<D>>,
}

impl<D> StackLayout<D> {
    /// The card at the cursor, if the deck is not exhausted.
    pub fn top_card(&self) -> Option<&CardLayout<D>> {
        self.cards.last().filter(|card| card.is_top)
    }

    /// Visible deck indices, back to front.
    pub fn visible_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.cards.iter().map(|card| card.index)
    }

    /// True when no card is visible.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// A visible card paired with its host view.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedCard<V, Id, D> {
    /// Stable key of the item.
    pub id: Id,
    /// Where the view goes.
    pub layout: CardLayout<D>,
    /// Host-produced content.
    pub view: V,
}

/// A composed frame: the placeholder plus every visible card.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedStack<V, Id, D> {
    /// Where the empty-state view goes.
    pub placeholder: PlaceholderLayout,
    /// Host-produced empty-state view.
    pub empty_view: V,
    /// Back to front, matching [`StackLayout::cards`].
    pub cards: Vec<RenderedCard<V, Id, D>>,
}

/// Stateless layout and composition of a card stack.
#[derive(Debug, Clone, Copy, Default)]
pub struct StackRenderer;

impl StackRenderer {
    /// Lay out the stack for `snapshot`. Cards come back to front.
    pub fn layout<D: Clone>(
        snapshot: &InteractionSnapshot<D>,
        config: &CardStackConfig,
        deck_len: usize,
    ) -> StackLayout<D> {
        let current = snapshot.current_index.min(deck_len);
        let remaining = deck_len - current;

        let placeholder = PlaceholderLayout {
            scale: layer_scale(config.card_scale(), remaining),
            z_index: z_index_for(deck_len),
        };

        // Only `current..current + max_visible_cards` can satisfy
        // 0 <= relative < max_visible_cards; walk it in reverse deck order.
        let visible_end = current
            .saturating_add(config.max_visible_cards())
            .min(deck_len);
        let cards = (current..visible_end)
            .rev()
            .map(|index| {
                let relative = index - current;
                let is_top = relative == 0;
                CardLayout {
                    index,
                    relative,
                    z_index: z_index_for(index),
                    offset_y: relative as f32 * config.card_offset(),
                    scale: layer_scale(config.card_scale(), relative),
                    translation: if is_top {
                        snapshot.translation
                    } else {
                        Translation::ZERO
                    },
                    is_top,
                    direction: if is_top {
                        snapshot.direction.clone()
                    } else {
                        None
                    },
                }
            })
            .collect();

        StackLayout { placeholder, cards }
    }

    /// Produce host views for a layout. `content` receives the item, the
    /// in-progress direction and whether the card is on top; `id` yields a
    /// stable key per item for the host's diffing.
    pub fn compose<K, D, V, Id>(
        layout: &StackLayout<D>,
        deck: &K,
        id: impl Fn(&K::Item) -> Id,
        mut content: impl FnMut(&K::Item, Option<D>, bool) -> V,
        empty: impl FnOnce() -> V,
    ) -> RenderedStack<V, Id, D>
    where
        K: Deck + ?Sized,
        D: Clone,
    {
        let empty_view = empty();
        let cards = layout
            .cards
            .iter()
            .filter_map(|card| {
                let item = deck.item(card.index)?;
                Some(RenderedCard {
                    id: id(item),
                    view: content(item, card.direction.clone(), card.is_top),
                    layout: card.clone(),
                })
            })
            .collect();

        RenderedStack {
            placeholder: layout.placeholder,
            empty_view,
            cards,
        }
    }
}

/// `start − index`, so earlier cards draw above later ones.
fn z_index_for(index: usize) -> f64 {
    -(index as f64)
}

fn layer_scale(card_scale: f32, relative: usize) -> f32 {
    (1.0 - card_scale * relative as f32).max(0.0)
}
