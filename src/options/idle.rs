use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use web_time::Duration;

use crate::input::InteractionKind;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Idle", inline)]
#[serde(default)]
/// Idle deadlines and the input signals that count as user activity.
pub struct IdleOptions {
    /// Idle time before autorotate starts, in milliseconds.
    #[schemars(title = "Rotate Delay (ms)", range(min = 0, max = 60000), extend("step" = 500))]
    pub rotate_delay_ms: u64,
    /// Idle time before the scripted transition starts, in milliseconds.
    #[schemars(title = "Transition Delay (ms)", range(min = 0, max = 120000), extend("step" = 500))]
    pub transition_delay_ms: u64,
    /// Input signals that reset the idle cycle.
    #[schemars(skip)]
    pub signals: Vec<InteractionKind>,
}

impl IdleOptions {
    /// Autorotate delay as a [`Duration`].
    #[must_use]
    pub fn rotate_delay(&self) -> Duration {
        Duration::from_millis(self.rotate_delay_ms)
    }

    /// Transition delay as a [`Duration`].
    #[must_use]
    pub fn transition_delay(&self) -> Duration {
        Duration::from_millis(self.transition_delay_ms)
    }
}

impl Default for IdleOptions {
    fn default() -> Self {
        Self {
            rotate_delay_ms: 3000,
            transition_delay_ms: 10000,
            signals: InteractionKind::DEFAULT_SIGNALS.to_vec(),
        }
    }
}
