#![no_std]
#![no_main]

use defmt_rtt as _;
use panic_probe as _;

mod lcd;
mod pins;
mod timer;

use rp_pico as bsp;

use bsp::entry;
use bsp::{hal, hal::pac};

use keypad_calc::calculator::Calculator;
use keypad_calc::debounce::Keypad;
use keypad_calc::matrix::Matrix;

defmt::timestamp!("{=u64:us}", timer::now().ticks());

#[entry]
fn main() -> ! {
    let mut pac = pac::Peripherals::take().unwrap();
    let sio = hal::Sio::new(pac.SIO);

    // Set up the watchdog driver - needed by the clock setup code
    let mut watchdog = hal::watchdog::Watchdog::new(pac.WATCHDOG);
    // Configure the clocks
    let clocks = hal::clocks::init_clocks_and_plls(
        bsp::XOSC_CRYSTAL_FREQ,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    )
    .ok()
    .unwrap();

    let pins = bsp::Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );

    let mut timer = hal::Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);

    let matrix = Matrix::new(pins::columns!(pins), pins::rows!(pins), true);
    let mut keypad = Keypad::new(matrix, timer);

    let hd44780 = pins::lcd!(pins, timer).unwrap();
    let display = lcd::Lcd::new(hd44780, timer).unwrap();
    let mut calculator = Calculator::new(display);

    defmt::info!("calculator ready");

    match calculator.run(&mut keypad) {
        Ok(never) => match never {},
        Err(e) => core::panic!("Calculator stopped: {:?}", e),
    }
}
