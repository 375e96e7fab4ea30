//! sorting-hat firmware - four-button house sorting quiz on nRF52840.
//!
//! A single Embassy task owns every peripheral and runs a
//! poll-and-sleep loop:
//!
//! 1. sample the four buttons through the debounce gate of the
//!    current phase,
//! 2. on an accepted start/restart press, wait out the settle delay,
//! 3. feed the press to the quiz state machine,
//! 4. log the transition over RTT and redraw the OLED.
//!
//! If the OLED does not answer at boot the firmware logs the failure
//! and halts; there is nothing useful to do without a display.

#![no_std]
#![no_main]

use defmt::{error, info, warn};
use embassy_executor::Spawner;
use embassy_nrf::gpio::{Input, Pull};
use embassy_nrf::twim::{self, Twim};
use embassy_nrf::{bind_interrupts, peripherals};
use embassy_time::{Instant, Timer};
use sorting_hat::config::{POLL_INTERVAL_MS, START_SETTLE_MS};
use sorting_hat::quiz::{Choice, Quiz, Transition};
use sorting_hat::ui::buttons::ButtonPoller;
use sorting_hat::ui::display::{self, Display};
use sorting_hat::ui::input_logic::{Gesture, InputGates};
use sorting_hat::ui::{layout, PollEvent, Screen};
use sorting_hat::Error;
use {defmt_rtt as _, panic_probe as _};

bind_interrupts!(struct Irqs {
    TWISPI0 => twim::InterruptHandler<peripherals::TWISPI0>;
});

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("sorting-hat starting");

    // I²C: SDA P0.26, SCL P0.27
    let mut i2c_config = twim::Config::default();
    i2c_config.frequency = twim::Frequency::K400;
    let i2c = Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, i2c_config);

    let mut oled = match display::init(i2c) {
        Ok(oled) => oled,
        Err(e) => halt(e),
    };
    info!("OLED ready");

    // Buttons A..D: P0.11, P0.12, P0.24, P0.25 (active-low)
    let mut buttons = ButtonPoller::new([
        Input::new(p.P0_11, Pull::Up),
        Input::new(p.P0_12, Pull::Up),
        Input::new(p.P0_24, Pull::Up),
        Input::new(p.P0_25, Pull::Up),
    ]);

    let mut quiz = Quiz::new();
    let mut gates = InputGates::new();

    redraw(&mut oled, quiz.screen());

    loop {
        let gesture = Gesture::for_phase(quiz.phase());
        let now = Instant::now().as_millis();

        if let PollEvent::Pressed(choice) = buttons.poll(gates.gate(gesture), now) {
            if gesture.settles() {
                Timer::after_millis(START_SETTLE_MS).await;
            }

            let transition = quiz.press(choice);
            report(&quiz, transition);
            redraw(&mut oled, quiz.screen());
        }

        Timer::after_millis(POLL_INTERVAL_MS).await;
    }
}

/// Log a transition; on completion also dump every answer.
fn report(quiz: &Quiz, transition: Transition) {
    match transition {
        Transition::Started => info!("Quiz: started"),
        Transition::Answered { question, choice } => {
            info!("Question {} answered: {}", question + 1, choice.number());
        }
        Transition::Completed {
            question,
            choice,
            category,
        } => {
            info!("Question {} answered: {}", question + 1, choice.number());
            info!("Sorted into house: {}", category.name());
            info!("User responses:");
            for (i, slot) in quiz.answers().slots().iter().enumerate() {
                info!("Q{}: {}", i + 1, slot.map_or(0, Choice::number));
            }
        }
        Transition::Reset => info!("Quiz: reset"),
    }
}

fn redraw<I2C>(oled: &mut Display<I2C>, screen: Screen)
where
    I2C: embedded_hal::i2c::I2c,
{
    // A failed flush leaves the old frame up; the next redraw is full.
    if let Err(e) = display::draw(oled, &layout::frame(screen)) {
        warn!("Display: redraw of {} failed: {}", screen, e);
    }
}

fn halt(e: Error) -> ! {
    error!("OLED init failed: {}", e);
    loop {
        cortex_m::asm::wfi();
    }
}
