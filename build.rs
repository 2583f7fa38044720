fn main() {
    // ESP-IDF link arguments are only needed for the on-device binary.
    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}
