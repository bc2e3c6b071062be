// file: src/form/slider.rs
// description: range input model with step snapping and label text
// reference: behaves like an html range input (clamp, snap to step)

use crate::config::SliderConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct Slider {
    min: f64,
    max: f64,
    step: f64,
    decimals: usize,
    ticks: u64,
}

impl Slider {
    pub fn from_config(config: &SliderConfig) -> Self {
        let mut slider = Self {
            min: config.min,
            max: config.max,
            step: config.step,
            decimals: step_decimals(config.step),
            ticks: 0,
        };
        slider.set(config.default);
        slider
    }

    /// Clamps to the range and snaps to the nearest step. Non-finite input
    /// leaves the value unchanged. An inverted range pins the value to `min`.
    pub fn set(&mut self, value: f64) {
        if !value.is_finite() {
            return;
        }

        // not f64::clamp, which panics on an inverted or NaN range
        let clamped = value.max(self.min).min(self.max);
        let ticks = ((clamped - self.min) / self.step).round() as u64;
        self.ticks = ticks.min(self.max_ticks());
    }

    pub fn value(&self) -> f64 {
        let raw = self.min + self.ticks as f64 * self.step;
        let scale = 10f64.powi(self.decimals as i32);
        (raw * scale).round() / scale
    }

    /// The value as the control reports it: "0.5", "1", "50".
    pub fn display_value(&self) -> String {
        let text = format!("{:.*}", self.decimals, self.value());
        if text.contains('.') {
            text.trim_end_matches('0').trim_end_matches('.').to_string()
        } else {
            text
        }
    }

    fn max_ticks(&self) -> u64 {
        ((self.max - self.min) / self.step + 1e-9).floor() as u64
    }
}

fn step_decimals(step: f64) -> usize {
    step.to_string()
        .split_once('.')
        .map(|(_, frac)| frac.len())
        .unwrap_or(0)
}
