//! Reads the RP2040 free-running microsecond timer, for log timestamps
use rp2040_hal::fugit;
use rp2040_hal::pac;

pub type Instant = fugit::Instant<u64, 1, 1_000_000>;

pub fn now() -> Instant {
    // Only reads the raw counter registers, which no driver owns exclusively
    let timer = unsafe { &*pac::TIMER::ptr() };
    Instant::from_ticks(loop {
        let e = timer.timerawh.read().bits();
        let t = timer.timerawl.read().bits();
        let e2 = timer.timerawh.read().bits();
        if e == e2 {
            break ((e as u64) << 32) | (t as u64);
        }
    })
}
