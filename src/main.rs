#![cfg_attr(all(target_arch = "arm", target_os = "none"), no_std)]
#![cfg_attr(all(target_arch = "arm", target_os = "none"), no_main)]

#[cfg(all(target_arch = "arm", target_os = "none"))]
use panic_reset as _;

#[cfg(all(target_arch = "arm", target_os = "none"))]
use cortex_m_rt::entry;
#[cfg(all(target_arch = "arm", target_os = "none"))]
use stm32f1xx_hal::pac::{CorePeripherals, Peripherals};

#[cfg(all(target_arch = "arm", target_os = "none"))]
use crate::cube_controller::CubeController;

#[cfg(all(target_arch = "arm", target_os = "none"))]
mod cube_controller;
#[cfg(all(target_arch = "arm", target_os = "none"))]
mod cube_gpio_port;
#[cfg(all(target_arch = "arm", target_os = "none", feature = "semihosting"))]
mod cube_logger;
#[cfg(all(target_arch = "arm", target_os = "none"))]
mod cube_tick;

#[cfg(all(target_arch = "arm", target_os = "none"))]
#[entry]
fn main() -> ! {
    let dp = Peripherals::take().unwrap();
    let cp = CorePeripherals::take().unwrap();

    #[cfg(feature = "semihosting")]
    cube_logger::init();

    let mut controller = CubeController::new(dp, cp);

    loop {
        controller.tick();
    }
}

#[cfg(not(all(target_arch = "arm", target_os = "none")))]
fn main() {
    eprintln!("led-cube-firmware runs on the cube itself, build it with --target thumbv7m-none-eabi");
}
