use std::env;

const BAKED_VARS: [&str; 4] = [
    "DASHBOARD_BACKEND_URL",
    "DASHBOARD_DEVICE_ID",
    "DASHBOARD_POLL_MS",
    "DASHBOARD_CLOCK_MS",
];

fn main() {
    // A .env file is optional; real environment variables win over it.
    // Watched even when absent so creating one triggers a rebuild.
    println!("cargo:rerun-if-changed=.env");
    if let Ok(path) = dotenv::dotenv() {
        println!("cargo:rerun-if-changed={}", path.display());
    }

    for var in BAKED_VARS {
        println!("cargo:rerun-if-env-changed={var}");
        if let Ok(value) = env::var(var) {
            println!("cargo:rustc-env={var}={value}");
        }
    }
}
