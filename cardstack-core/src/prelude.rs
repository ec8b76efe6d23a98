//! Everything a host needs to drive a card stack.

pub use cardstack_model::{Deck, Translation, ViewportSize};

pub use crate::animation::{Animation, EasingKind};
pub use crate::config::{CardStackConfig, ConfigOverrides};
pub use crate::engine::{
    CardInteractionEngine, DragResolution, InteractionPhase,
    InteractionSnapshot,
};
pub use crate::error::{CardStackError, ConfigError};
pub use crate::policy::DragAxis;
pub use crate::renderer::{StackLayout, StackRenderer};
