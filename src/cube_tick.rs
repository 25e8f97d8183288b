use core::cell::RefCell;

use cortex_m::interrupt::{free, Mutex};
use stm32f1xx_hal::pac::{NVIC, TIM2};
use stm32f1xx_hal::prelude::*;
use stm32f1xx_hal::rcc::{Clocks, APB1};
use stm32f1xx_hal::stm32::{interrupt, Interrupt};
use stm32f1xx_hal::timer::{CountDownTimer, Event, Timer};

use led_cube_firmware::cube_frame_share::CubeFrameShare;
use led_cube_firmware::cube_sequencer::CubeSequencer;

// Show speed in sequencer ticks per second
pub const CUBE_TICK_FREQUENCY_HZ: u32 = 15;

// Written by the tick interrupt, scanned out by the main loop
pub static CUBE_FRAME: CubeFrameShare = CubeFrameShare::new();

static CUBE_TICK_TIMER: Mutex<RefCell<Option<CountDownTimer<TIM2>>>> = Mutex::new(RefCell::new(None));
static CUBE_SEQUENCER: Mutex<RefCell<Option<CubeSequencer>>> = Mutex::new(RefCell::new(None));

pub struct CubeTick;

impl CubeTick {
    /// Hands a fresh sequencer to the tick interrupt and starts TIM2.
    pub fn start(tim2: TIM2, clocks: &Clocks, apb1: &mut APB1) {
        let mut tick_timer = Timer::tim2(tim2, clocks, apb1).start_count_down(CUBE_TICK_FREQUENCY_HZ.hz());
        tick_timer.listen(Event::Update);

        free(|cs| {
            CUBE_TICK_TIMER.borrow(cs).replace(Some(tick_timer));
            CUBE_SEQUENCER.borrow(cs).replace(Some(CubeSequencer::new()));
        });

        unsafe {
            // For the animation show
            NVIC::unmask(Interrupt::TIM2);
        }
    }
}

#[interrupt]
fn TIM2() {
    free(|cs| {
        if let Some(tick_timer) = CUBE_TICK_TIMER.borrow(cs).borrow_mut().as_mut() {
            // Clears the update flag
            let _ = tick_timer.wait();
        }

        if let Some(sequencer) = CUBE_SEQUENCER.borrow(cs).borrow_mut().as_mut() {
            sequencer.tick();
            CUBE_FRAME.publish(sequencer.frame());
        }
    });
}
