//! Bench scenarios driven through the 8-bit bus encoding.
//!
//! Each test resets the controller, lets the initial sensor levels settle,
//! changes the bus, waits out the debounce window with margin, and checks
//! the output byte, the same way the bench harness exercises a board.

use super::mock_hw::{MockHardware, RecordingSink};

use growbox::app::events::AppEvent;
use growbox::app::service::Controller;
use growbox::bus::{
    OUT_ACTUATORS, OUT_COOL, OUT_DEHUMIDIFY, OUT_FAULT, OUT_HEARTBEAT, OUT_HEAT, OUT_LIGHT,
    OUT_SERIAL_TX, OUT_WATER,
};
use growbox::config::ControllerConfig;
use growbox::history::Trend;
use growbox::sensors::{Channel, Level};

/// Debounce window (100k ticks) plus margin.
const FILTER_CYCLES: u32 = 125_000;

const RADISH: u8 = 0b0000_0000;
const BASIL: u8 = 0b0000_0010;
const PEA_SHOOTS: u8 = 0b0000_0100;
const SUNFLOWER: u8 = 0b0000_0110;
const OVERRIDE: u8 = 0b0000_0001;

const ALL_OPTIMAL: u8 = 0b10_10_10_10;

struct Bench {
    ctl: Controller,
    hw: MockHardware,
    sink: RecordingSink,
}

impl Bench {
    fn new(ui_in: u8, uio_in: u8) -> Self {
        Self::with_config(ControllerConfig::default(), ui_in, uio_in)
    }

    fn with_config(config: ControllerConfig, ui_in: u8, uio_in: u8) -> Self {
        let mut bench = Self {
            ctl: Controller::new(config),
            hw: MockHardware::new(ui_in, uio_in),
            sink: RecordingSink::new(),
        };
        bench.ctl.start(&mut bench.hw, &mut bench.sink);
        bench.ctl.reset(&mut bench.hw, &mut bench.sink);
        bench
    }

    fn run(&mut self, ticks: u32) {
        for _ in 0..ticks {
            self.ctl.tick(&mut self.hw, &mut self.sink);
        }
    }

    /// Let the initial levels settle, then present `ui_in` and wait again.
    fn settle_then(&mut self, ui_in: u8) {
        self.run(FILTER_CYCLES);
        self.hw.ui_in = ui_in;
        self.run(FILTER_CYCLES);
    }

    fn actuators(&self) -> u8 {
        self.hw.uo_out() & OUT_ACTUATORS
    }
}

// ── Reset ─────────────────────────────────────────────────────

#[test]
fn reset_with_optimal_sensors_is_quiet() {
    let mut bench = Bench::new(ALL_OPTIMAL, RADISH);
    bench.run(FILTER_CYCLES);
    let out = bench.hw.uo_out();
    assert_eq!(out & OUT_ACTUATORS, 0, "uo_out={out:08b}");
    assert_eq!(out & OUT_FAULT, 0);
    assert_ne!(out & OUT_SERIAL_TX, 0, "serial line idles high");
    assert_eq!(
        bench.sink.events.first(),
        Some(&AppEvent::Started(growbox::profile::CropProfile::Radish))
    );
}

// ── Profiles ──────────────────────────────────────────────────

#[test]
fn radish_cold_turns_on_heater_only() {
    let mut bench = Bench::new(ALL_OPTIMAL, RADISH);
    bench.settle_then(0b10_10_10_00);
    assert_eq!(
        bench.actuators(),
        OUT_HEAT,
        "uo_out={:08b}",
        bench.hw.uo_out()
    );
}

#[test]
fn basil_heats_at_cool_temperature() {
    let mut bench = Bench::new(ALL_OPTIMAL, BASIL);
    bench.settle_then(0b10_10_10_01);
    assert_ne!(bench.hw.uo_out() & OUT_HEAT, 0, "uo_out={:08b}", bench.hw.uo_out());
}

#[test]
fn radish_does_not_heat_at_cool_temperature() {
    let mut bench = Bench::new(ALL_OPTIMAL, RADISH);
    bench.settle_then(0b10_10_10_01);
    assert_eq!(bench.hw.uo_out() & OUT_HEAT, 0);
}

#[test]
fn dry_soil_starts_water_pump() {
    let mut bench = Bench::new(ALL_OPTIMAL, RADISH);
    bench.settle_then(0b00_10_10_10);
    assert_ne!(bench.hw.uo_out() & OUT_WATER, 0);
}

#[test]
fn pea_shoots_cool_at_optimal_temperature() {
    let mut bench = Bench::new(0b10_10_10_01, PEA_SHOOTS);
    bench.run(FILTER_CYCLES);
    assert_eq!(bench.hw.uo_out() & OUT_COOL, 0, "temperature still cool");
    bench.hw.ui_in = ALL_OPTIMAL;
    bench.run(FILTER_CYCLES);
    assert_ne!(bench.hw.uo_out() & OUT_COOL, 0);
}

#[test]
fn sunflower_dehumidifies_at_optimal_humidity() {
    let mut bench = Bench::new(0b10_10_01_10, SUNFLOWER);
    bench.run(FILTER_CYCLES);
    assert_eq!(bench.hw.uo_out() & OUT_DEHUMIDIFY, 0);
    bench.hw.ui_in = ALL_OPTIMAL;
    bench.run(FILTER_CYCLES);
    assert_ne!(bench.hw.uo_out() & OUT_DEHUMIDIFY, 0);
}

#[test]
fn darkness_turns_on_lights() {
    let mut bench = Bench::new(ALL_OPTIMAL, RADISH);
    bench.settle_then(0b10_00_10_10);
    assert_ne!(bench.hw.uo_out() & OUT_LIGHT, 0);
}

#[test]
fn profile_switch_is_reported_once() {
    let mut bench = Bench::new(ALL_OPTIMAL, RADISH);
    bench.run(10);
    bench.hw.uio_in = SUNFLOWER;
    bench.run(10);
    let switches = bench
        .sink
        .count(|e| matches!(e, AppEvent::ProfileChanged { .. }));
    assert_eq!(switches, 1);
    assert_eq!(bench.ctl.profile(), growbox::profile::CropProfile::Sunflower);
}

// ── Override ──────────────────────────────────────────────────

#[test]
fn override_forces_all_actuators_off() {
    let mut bench = Bench::new(0b00_00_00_00, RADISH);
    bench.run(FILTER_CYCLES);
    assert_eq!(bench.actuators(), OUT_WATER | OUT_HEAT | OUT_LIGHT);

    bench.hw.uio_in = OVERRIDE;
    bench.run(100);
    assert_eq!(bench.actuators(), 0, "uo_out={:08b}", bench.hw.uo_out());
    assert_eq!(bench.sink.count(|e| *e == AppEvent::OverrideEngaged), 1);
}

#[test]
fn override_latency_is_one_tick() {
    let mut bench = Bench::new(0b00_00_00_00, RADISH);
    bench.run(FILTER_CYCLES);

    bench.hw.uio_in = OVERRIDE;
    bench.run(1);
    assert_ne!(bench.actuators(), 0, "command sampled, latch not yet applied");
    bench.run(1);
    assert_eq!(bench.actuators(), 0);

    bench.hw.uio_in = RADISH;
    bench.run(1);
    assert_eq!(bench.actuators(), 0, "release sampled, latch still set");
    bench.run(1);
    assert_eq!(bench.actuators(), OUT_WATER | OUT_HEAT | OUT_LIGHT);
    assert_eq!(bench.sink.count(|e| *e == AppEvent::OverrideReleased), 1);
}

// ── Filtering ─────────────────────────────────────────────────

#[test]
fn short_glitch_never_reaches_actuators() {
    let mut bench = Bench::new(ALL_OPTIMAL, RADISH);
    bench.run(FILTER_CYCLES);
    bench.hw.ui_in = 0b10_10_10_00;
    bench.run(50_000);
    bench.hw.ui_in = ALL_OPTIMAL;
    for _ in 0..FILTER_CYCLES {
        bench.run(1);
        assert_eq!(bench.actuators(), 0);
    }
    assert_eq!(bench.ctl.filtered(Channel::Temperature), Level::L2);
}

#[test]
fn disabled_controller_holds_everything() {
    let mut bench = Bench::new(ALL_OPTIMAL, RADISH);
    bench.run(1_000);
    bench.hw.enable = false;
    bench.hw.ui_in = 0b10_10_10_00;
    bench.run(FILTER_CYCLES);
    assert_eq!(bench.actuators(), 0);
    assert_eq!(bench.ctl.tick_count(), 1_000);
    assert_eq!(bench.hw.samples, 1_000 + u64::from(FILTER_CYCLES));

    bench.hw.enable = true;
    bench.run(FILTER_CYCLES);
    assert_eq!(bench.actuators(), OUT_HEAT);
}

// ── Heartbeat ─────────────────────────────────────────────────

#[test]
fn heartbeat_toggles_on_output_bus() {
    let config = ControllerConfig {
        heartbeat_period: 1_000,
        ..ControllerConfig::default()
    };
    let mut bench = Bench::with_config(config, ALL_OPTIMAL, RADISH);
    let mut toggles = 0;
    let mut last = bench.hw.uo_out() & OUT_HEARTBEAT;
    for _ in 0..5_000 {
        bench.run(1);
        let now = bench.hw.uo_out() & OUT_HEARTBEAT;
        if now != last {
            toggles += 1;
        }
        last = now;
    }
    assert_eq!(toggles, 10);
}

// ── History ───────────────────────────────────────────────────

#[test]
fn rising_temperature_fills_history_in_order() {
    let config = ControllerConfig {
        filter_threshold: 1,
        log_interval: 10,
        ..ControllerConfig::default()
    };
    let mut bench = Bench::with_config(config, ALL_OPTIMAL, RADISH);
    let sequence = [0u8, 0, 1, 1, 2, 2, 3, 3];
    for temp in sequence {
        bench.hw.ui_in = 0b10_10_10_00 | temp;
        bench.run(10);
    }

    let log = bench.ctl.history(Channel::Temperature);
    let expected: Vec<Level> = sequence.iter().map(|t| Level::from_bits(*t)).collect();
    assert_eq!(log.entries().as_slice(), expected.as_slice());
    assert_eq!(log.min(), Level::L0);
    assert_eq!(log.max(), Level::L3);
    assert_eq!(log.trend(), Trend::Flat);

    let humidity = bench.ctl.history(Channel::Humidity);
    assert_eq!(humidity.entries(), &[Level::L2; 8]);

    let telemetry = bench
        .sink
        .count(|e| matches!(e, AppEvent::Telemetry(_)));
    assert_eq!(telemetry, 8);
}

// ── Serial ────────────────────────────────────────────────────

#[test]
fn serial_line_stays_idle_without_contradiction() {
    let mut bench = Bench::new(0b00_00_00_00, BASIL);
    bench.settle_then(0b11_11_11_11);
    bench.hw.uio_in = PEA_SHOOTS;
    bench.hw.ui_in = 0b10_10_10_10;
    bench.run(FILTER_CYCLES);
    assert_eq!(bench.sink.count(|e| matches!(e, AppEvent::FaultRaised { .. })), 0);
    assert_eq!(bench.hw.serial_writes(), vec![true]);
}
