use core::convert::Infallible;

use log::info;
use stm32f1xx_hal::delay::Delay;
use stm32f1xx_hal::gpio::gpiob::{PB12, PB13, PB14};
use stm32f1xx_hal::gpio::{Output, PushPull, State};
use stm32f1xx_hal::pac::{CorePeripherals, Peripherals};
use stm32f1xx_hal::prelude::*;

use led_cube_firmware::cube_scan::CubeScan;

use crate::cube_gpio_port::CubeGpioPort;
use crate::cube_tick::{CubeTick, CUBE_FRAME, CUBE_TICK_FREQUENCY_HZ};

type CubeBoardScan = CubeScan<
    PB13<Output<PushPull>>,
    PB14<Output<PushPull>>,
    PB12<Output<PushPull>>,
    CubeGpioPort,
    Delay,
>;

pub struct CubeController {
    scan: CubeBoardScan,
}

impl CubeController {
    pub fn new(dp: Peripherals, cp: CorePeripherals) -> Self {
        let mut flash = dp.FLASH.constrain();
        let mut rcc = dp.RCC.constrain();

        let clocks = rcc
            .cfgr
            .use_hse(8.mhz())
            .sysclk(72.mhz())
            .hclk(72.mhz())
            .pclk1(36.mhz())
            .pclk2(72.mhz())
            .freeze(&mut flash.acr);

        let mut gpioa = dp.GPIOA.split(&mut rcc.apb2);
        let mut gpiob = dp.GPIOB.split(&mut rcc.apb2);

        let port = CubeGpioPort::new(
            (
                gpioa.pa0.into_push_pull_output(&mut gpioa.crl),
                gpioa.pa1.into_push_pull_output(&mut gpioa.crl),
                gpioa.pa2.into_push_pull_output(&mut gpioa.crl),
                gpioa.pa3.into_push_pull_output(&mut gpioa.crl),
                gpioa.pa4.into_push_pull_output(&mut gpioa.crl),
                gpioa.pa5.into_push_pull_output(&mut gpioa.crl),
                gpioa.pa6.into_push_pull_output(&mut gpioa.crl),
                gpioa.pa7.into_push_pull_output(&mut gpioa.crl),
            ),
            (
                gpiob.pb8.into_push_pull_output(&mut gpiob.crh),
                gpiob.pb9.into_push_pull_output(&mut gpiob.crh),
                gpiob.pb10.into_push_pull_output(&mut gpiob.crh),
            ),
        );

        // Outputs stay blanked until the first layer is latched
        let output_blank = gpiob
            .pb12
            .into_push_pull_output_with_state(&mut gpiob.crh, State::High);
        let shift_clock = gpiob.pb13.into_push_pull_output(&mut gpiob.crh);
        let shift_latch = gpiob.pb14.into_push_pull_output(&mut gpiob.crh);

        let delay = Delay::new(cp.SYST, clocks);

        let mut scan = CubeScan::new(shift_clock, shift_latch, output_blank, port, delay);
        Self::discharge(scan.reset());

        CubeTick::start(dp.TIM2, &clocks, &mut rcc.apb1);

        info!("cube ready, show ticking at {} Hz", CUBE_TICK_FREQUENCY_HZ);

        CubeController { scan }
    }

    /// Refreshes one layer. Called back to back from the main loop.
    pub fn tick(&mut self) {
        Self::discharge(self.scan.tick(&CUBE_FRAME));
    }

    fn discharge(result: Result<(), Infallible>) {
        match result {
            Ok(()) => {}
            Err(e) => match e {},
        }
    }
}
