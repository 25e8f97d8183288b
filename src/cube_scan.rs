use embedded_hal::blocking::delay::DelayUs;
use embedded_hal::digital::v2::OutputPin;

use crate::cube_frame::{CubeLayers, CUBE_ROW_UNLIT, CUBE_SIZE};

// Hold time after each layer in microseconds. Eight of these make up one full
// refresh, so keep it well below the flicker threshold divided by eight.
pub const CUBE_SCAN_SETTLE_US: u16 = 100;

/// The parallel part of the cube wiring: eight data lines feeding the shift
/// register chains and the binary layer address lines.
pub trait CubePort {
    type Error;

    /// Presents one row bitmask on the data lines.
    fn write_row(&mut self, row: u8) -> Result<(), Self::Error>;

    /// Drives the layer address lines to `layer` (0..=7).
    fn select_layer(&mut self, layer: u8) -> Result<(), Self::Error>;
}

/// Multiplexes a frame onto the cube, one layer per [`CubeScan::tick`].
pub struct CubeScan<SH, ST, OE, P, D> {
    shift_clock: SH,
    shift_latch: ST,
    output_blank: OE,
    port: P,
    delay: D,
    settle_us: u16,
    layer_idx: u8,
}

impl<SH, ST, OE, P, D, E> CubeScan<SH, ST, OE, P, D>
where
    SH: OutputPin<Error = E>,
    ST: OutputPin<Error = E>,
    OE: OutputPin<Error = E>,
    P: CubePort<Error = E>,
    D: DelayUs<u16>,
{
    pub fn new(shift_clock: SH, shift_latch: ST, output_blank: OE, port: P, delay: D) -> Self {
        Self::with_settle_time(shift_clock, shift_latch, output_blank, port, delay, CUBE_SCAN_SETTLE_US)
    }

    pub fn with_settle_time(
        shift_clock: SH,
        shift_latch: ST,
        output_blank: OE,
        port: P,
        delay: D,
        settle_us: u16,
    ) -> Self {
        Self {
            shift_clock,
            shift_latch,
            output_blank,
            port,
            delay,
            settle_us,
            layer_idx: 0,
        }
    }

    pub fn layer_idx(&self) -> u8 {
        self.layer_idx
    }

    /// Puts the chain into a known dark state: layer 0 selected and eight
    /// unlit rows shifted in. Must run before the first [`CubeScan::tick`].
    pub fn reset(&mut self) -> Result<(), E> {
        self.layer_idx = 0;
        self.port.select_layer(self.layer_idx)?;

        for _ in 0..CUBE_SIZE {
            self.shift_row(CUBE_ROW_UNLIT)?;
        }

        Ok(())
    }

    /// Shifts out the current layer, latches it behind blanked outputs and
    /// moves on to the next layer.
    pub fn tick<L: CubeLayers + ?Sized>(&mut self, layers: &L) -> Result<(), E> {
        let layer = layers.layer(self.layer_idx);

        self.shift_latch.set_low()?;

        for &row in layer.iter() {
            self.shift_row(row)?;
        }

        // Blank before the address and the latch change, or the previous
        // layer's pattern ghosts onto the new one
        self.output_blank.set_high()?;
        self.port.select_layer(self.layer_idx)?;
        self.shift_latch.set_high()?;
        self.output_blank.set_low()?;

        self.layer_idx = (self.layer_idx + 1) % CUBE_SIZE as u8;

        self.delay.delay_us(self.settle_us);

        Ok(())
    }

    fn shift_row(&mut self, row: u8) -> Result<(), E> {
        self.shift_clock.set_low()?;
        self.port.write_row(row)?;
        self.shift_clock.set_high()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube_frame::CubeFrame;
    use core::convert::Infallible;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Signal {
        ShiftLow,
        ShiftHigh,
        LatchLow,
        LatchHigh,
        BlankOn,
        BlankOff,
        Row(u8),
        Layer(u8),
        Delay(u16),
    }

    type Trace = Rc<RefCell<Vec<Signal>>>;

    struct MockPin {
        trace: Trace,
        low: Signal,
        high: Signal,
    }

    impl OutputPin for MockPin {
        type Error = Infallible;

        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.trace.borrow_mut().push(self.low);
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.trace.borrow_mut().push(self.high);
            Ok(())
        }
    }

    struct MockPort {
        trace: Trace,
    }

    impl CubePort for MockPort {
        type Error = Infallible;

        fn write_row(&mut self, row: u8) -> Result<(), Self::Error> {
            self.trace.borrow_mut().push(Signal::Row(row));
            Ok(())
        }

        fn select_layer(&mut self, layer: u8) -> Result<(), Self::Error> {
            self.trace.borrow_mut().push(Signal::Layer(layer));
            Ok(())
        }
    }

    struct MockDelay {
        trace: Trace,
    }

    impl DelayUs<u16> for MockDelay {
        fn delay_us(&mut self, us: u16) {
            self.trace.borrow_mut().push(Signal::Delay(us));
        }
    }

    fn mock_scan(trace: &Trace) -> CubeScan<MockPin, MockPin, MockPin, MockPort, MockDelay> {
        let pin = |low, high| MockPin {
            trace: trace.clone(),
            low,
            high,
        };

        CubeScan::with_settle_time(
            pin(Signal::ShiftLow, Signal::ShiftHigh),
            pin(Signal::LatchLow, Signal::LatchHigh),
            pin(Signal::BlankOff, Signal::BlankOn),
            MockPort { trace: trace.clone() },
            MockDelay { trace: trace.clone() },
            42,
        )
    }

    fn numbered_frame() -> CubeFrame {
        let mut frame = CubeFrame::new();

        for z in 0..8u8 {
            for y in 0..8u8 {
                frame.set_row(y, z, z * 8 + y);
            }
        }

        frame
    }

    #[test]
    fn tick_follows_the_shift_register_protocol() {
        let trace = Trace::default();
        let mut scan = mock_scan(&trace);
        let frame = numbered_frame();

        match scan.tick(&frame) {
            Ok(()) => {}
            Err(e) => match e {},
        }

        let mut expected = vec![Signal::LatchLow];
        for y in 0..8 {
            expected.push(Signal::ShiftLow);
            expected.push(Signal::Row(y));
            expected.push(Signal::ShiftHigh);
        }
        expected.extend_from_slice(&[
            Signal::BlankOn,
            Signal::Layer(0),
            Signal::LatchHigh,
            Signal::BlankOff,
            Signal::Delay(42),
        ]);

        assert_eq!(*trace.borrow(), expected);
        assert_eq!(scan.layer_idx(), 1);
    }

    #[test]
    fn layers_cycle_round_robin() {
        let trace = Trace::default();
        let mut scan = mock_scan(&trace);
        let frame = numbered_frame();
        let mut selected = Vec::new();

        for _ in 0..20 {
            trace.borrow_mut().clear();
            let before = scan.layer_idx();
            let _ = scan.tick(&frame);

            let signals = trace.borrow();
            let rows: Vec<u8> = signals
                .iter()
                .filter_map(|signal| match signal {
                    Signal::Row(row) => Some(*row),
                    _ => None,
                })
                .collect();
            let start = before * 8;
            assert_eq!(rows, (start..start + 8).collect::<Vec<u8>>());

            selected.extend(signals.iter().filter_map(|signal| match signal {
                Signal::Layer(layer) => Some(*layer),
                _ => None,
            }));
        }

        let expected: Vec<u8> = (0..20).map(|i| i % 8).collect();
        assert_eq!(selected, expected);
    }

    #[test]
    fn outputs_stay_blanked_while_latching() {
        let trace = Trace::default();
        let mut scan = mock_scan(&trace);
        let _ = scan.tick(&CubeFrame::new());

        let signals = trace.borrow();
        let position = |wanted: Signal| signals.iter().position(|&signal| signal == wanted).unwrap();
        let last_row = signals.iter().rposition(|signal| matches!(signal, Signal::Row(_))).unwrap();

        assert!(last_row < position(Signal::BlankOn));
        assert!(position(Signal::BlankOn) < position(Signal::Layer(0)));
        assert!(position(Signal::Layer(0)) < position(Signal::LatchHigh));
        assert!(position(Signal::LatchHigh) < position(Signal::BlankOff));
    }

    #[test]
    fn reset_shifts_a_dark_layer_without_latching() {
        let trace = Trace::default();
        let mut scan = mock_scan(&trace);
        let _ = scan.tick(&CubeFrame::new());
        let _ = scan.tick(&CubeFrame::new());
        trace.borrow_mut().clear();

        let _ = scan.reset();

        let signals = trace.borrow();
        assert_eq!(signals[0], Signal::Layer(0));
        assert_eq!(
            signals.iter().filter(|&&signal| signal == Signal::Row(CUBE_ROW_UNLIT)).count(),
            8
        );
        assert!(!signals.contains(&Signal::LatchHigh));
        assert_eq!(scan.layer_idx(), 0);
    }
}
