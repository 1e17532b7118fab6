#![no_main]
#![no_std]

use cortex_m_rt::entry;
use panic_halt as _;

use cannode::hw::pins::PinId;
use cannode::hw::pins::Pins;
use cannode::hw::Led;

#[entry]
fn main() -> ! {
    let pins = Pins::take().unwrap();

    pins.init_with(|p| {
        for id in PinId::ALL {
            p.configure_output(id);
        }
    });

    let mut heartbeat = Led::active_high(pins.pin(PinId::Led1));

    loop {
        heartbeat.toggle();
        cortex_m::asm::delay(8_000_000);
    }
}
