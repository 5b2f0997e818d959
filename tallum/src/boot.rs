/// Jump to the bootloader, so that new firmware can be flashed.
pub fn jump_to_bootloader() {
    warn!("No bootloader entry configured, rebooting");
    reboot_keyboard();
}

pub(crate) fn reboot_keyboard() {
    warn!("Rebooting keyboard!");
    // For cortex-m:
    #[cfg(all(
        target_arch = "arm",
        target_os = "none",
        any(target_abi = "eabi", target_abi = "eabihf")
    ))]
    cortex_m::peripheral::SCB::sys_reset();
}
