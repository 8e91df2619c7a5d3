#![no_std]
#![no_main]

use chainboot::{Address, boot::cortex_m::CortexM, config::startup_address, jump_to_application};

use {defmt_rtt as _, panic_halt as _};

/// Vector table of the image that takes over.
const STARTUP_ADDRESS: Address = startup_address(env!("CHAINBOOT_STARTUP_ADDRESS"));

#[unsafe(no_mangle)]
fn chainboot_main() {
    defmt::info!("chainboot");

    let core = unsafe { CortexM::steal() };
    unsafe { jump_to_application(core, STARTUP_ADDRESS) }
}
