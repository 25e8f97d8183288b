use stm32f1xx_hal::gpio::gpioa::{PA0, PA1, PA2, PA3, PA4, PA5, PA6, PA7};
use stm32f1xx_hal::gpio::gpiob::{PB10, PB8, PB9};
use stm32f1xx_hal::gpio::{Output, PushPull};
use stm32f1xx_hal::pac::{GPIOA, GPIOB};

use core::convert::Infallible;

use led_cube_firmware::cube_scan::CubePort;

// First pin of the layer address lines on port B
const LAYER_ADDRESS_SHIFT: u32 = 8;
const LAYER_ADDRESS_MASK: u32 = 0b111;

/// Data bus on PA0..PA7, layer address on PB8..PB10.
///
/// Both are written through the bit set/reset registers, so every line of a
/// group changes in the same cycle and the rest of each port is left alone.
pub struct CubeGpioPort {
    _data: (
        PA0<Output<PushPull>>,
        PA1<Output<PushPull>>,
        PA2<Output<PushPull>>,
        PA3<Output<PushPull>>,
        PA4<Output<PushPull>>,
        PA5<Output<PushPull>>,
        PA6<Output<PushPull>>,
        PA7<Output<PushPull>>,
    ),
    _address: (PB8<Output<PushPull>>, PB9<Output<PushPull>>, PB10<Output<PushPull>>),
}

impl CubeGpioPort {
    pub fn new(
        data: (
            PA0<Output<PushPull>>,
            PA1<Output<PushPull>>,
            PA2<Output<PushPull>>,
            PA3<Output<PushPull>>,
            PA4<Output<PushPull>>,
            PA5<Output<PushPull>>,
            PA6<Output<PushPull>>,
            PA7<Output<PushPull>>,
        ),
        address: (PB8<Output<PushPull>>, PB9<Output<PushPull>>, PB10<Output<PushPull>>),
    ) -> Self {
        Self {
            _data: data,
            _address: address,
        }
    }
}

impl CubePort for CubeGpioPort {
    type Error = Infallible;

    fn write_row(&mut self, row: u8) -> Result<(), Self::Error> {
        let set = u32::from(row);
        let reset = u32::from(!row);

        // Safe: PA0..PA7 are owned by this port
        unsafe {
            (*GPIOA::ptr()).bsrr.write(|w| w.bits(reset << 16 | set));
        }

        Ok(())
    }

    fn select_layer(&mut self, layer: u8) -> Result<(), Self::Error> {
        let set = (u32::from(layer) & LAYER_ADDRESS_MASK) << LAYER_ADDRESS_SHIFT;
        let reset = (!u32::from(layer) & LAYER_ADDRESS_MASK) << LAYER_ADDRESS_SHIFT;

        // Safe: PB8..PB10 are owned by this port
        unsafe {
            (*GPIOB::ptr()).bsrr.write(|w| w.bits(reset << 16 | set));
        }

        Ok(())
    }
}
