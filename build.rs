fn main() {
    println!("cargo:rerun-if-env-changed=RELAYBOT_CONFIG");

    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}
