//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! whatever `log` backend the host installed.  A telemetry uplink would
//! implement the same trait.

use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;
use crate::history::Trend;

/// Adapter that logs every [`AppEvent`].
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

fn trend_glyph(trend: Trend) -> char {
    match trend {
        Trend::Up => '+',
        Trend::Down => '-',
        Trend::Flat => '=',
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Telemetry(t) => {
                let [temp, humid, light, soil] = &t.history;
                info!(
                    "TELEM | tick={} | crop={} | T={} H={} L={} S={} | \
                     trend={}{}{}{} | water={} heat={} cool={} light={} dehum={} | \
                     override={} fault={} episodes={} reports={}",
                    t.ticks,
                    t.profile.name(),
                    t.filtered.temperature.bits(),
                    t.filtered.humidity.bits(),
                    t.filtered.light.bits(),
                    t.filtered.soil_moisture.bits(),
                    trend_glyph(temp.trend),
                    trend_glyph(humid.trend),
                    trend_glyph(light.trend),
                    trend_glyph(soil.trend),
                    u8::from(t.actuators.water),
                    u8::from(t.actuators.heat),
                    u8::from(t.actuators.cool),
                    u8::from(t.actuators.light),
                    u8::from(t.actuators.dehumidify),
                    t.override_active,
                    t.fault,
                    t.fault_episodes,
                    t.reports_sent,
                );
            }
            AppEvent::ProfileChanged { from, to } => {
                info!("PROFILE | {} -> {}", from.name(), to.name());
            }
            AppEvent::OverrideEngaged => info!("OVERRIDE | engaged, actuators off"),
            AppEvent::OverrideReleased => info!("OVERRIDE | released"),
            AppEvent::FaultRaised { episode } => {
                warn!("FAULT | heat/cool contradiction, episode {}", episode);
            }
            AppEvent::FaultCleared => info!("FAULT | cleared"),
            AppEvent::FaultReported { byte } => {
                info!("FAULT | reporting 0x{:02X} on serial line", byte);
            }
            AppEvent::Reset => info!("RESET"),
            AppEvent::Started(profile) => {
                info!("START | crop={}", profile.name());
            }
        }
    }
}
