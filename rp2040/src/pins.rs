// Keypad: columns GP2-GP5 drive high one at a time, rows GP6-GP9 are pulled down and read high
// under a pressed key. LCD: RS GP16, EN GP17, D4-D7 GP18-GP21.

macro_rules! columns {
    ($pins:expr) => {
        [
            $pins.gpio2.into_push_pull_output().into_dyn_pin(),
            $pins.gpio3.into_push_pull_output().into_dyn_pin(),
            $pins.gpio4.into_push_pull_output().into_dyn_pin(),
            $pins.gpio5.into_push_pull_output().into_dyn_pin(),
        ]
    };
}

macro_rules! rows {
    ($pins:expr) => {
        [
            $pins.gpio6.into_pull_down_input().into_dyn_pin(),
            $pins.gpio7.into_pull_down_input().into_dyn_pin(),
            $pins.gpio8.into_pull_down_input().into_dyn_pin(),
            $pins.gpio9.into_pull_down_input().into_dyn_pin(),
        ]
    };
}

macro_rules! lcd {
    ($pins:expr, $delay:expr) => {
        hd44780_driver::HD44780::new_4bit(
            $pins.gpio16.into_push_pull_output(),
            $pins.gpio17.into_push_pull_output(),
            $pins.gpio18.into_push_pull_output(),
            $pins.gpio19.into_push_pull_output(),
            $pins.gpio20.into_push_pull_output(),
            $pins.gpio21.into_push_pull_output(),
            &mut $delay,
        )
    };
}

pub(crate) use columns;
pub(crate) use lcd;
pub(crate) use rows;
