pub mod clock;
pub mod damped;
pub mod interaction;
pub mod marker;
pub mod oscillator;
pub mod queue;

pub use clock::{Clock, ManualClock};
pub use damped::{approach, DampedProperty, Smoothing, SmoothingMode};
pub use interaction::{CursorStyle, InteractionState, PointerEvent};
pub use marker::{MarkerSlot, TransientMarker};
pub use oscillator::FloatWave;
pub use queue::{pointer_channel, PointerQueue, PointerSender};
