use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    // Copy emissions.csv to OUT_DIR for include_str
    let emissions_src = Path::new("../fixtures/emissions.csv");
    if emissions_src.exists() {
        fs::copy(emissions_src, Path::new(&out_dir).join("emissions.csv")).unwrap();
    } else {
        fs::write(
            Path::new(&out_dir).join("emissions.csv"),
            "Continent,Region,Country,Country Code,Year,Emissions,Emissions Per Capita\n\
             Europe,Western Europe,Germany,276,2010,745384,9.1\n\
             Americas,Northern America,United States,840,2010,5433057,17.5\n",
        )
        .unwrap();
    }

    // Copy the world boundaries GeoJSON to OUT_DIR for include_str
    let world_src = Path::new("../fixtures/world-countries.geo.json");
    if world_src.exists() {
        fs::copy(
            world_src,
            Path::new(&out_dir).join("world-countries.geo.json"),
        )
        .unwrap();
    } else {
        fs::write(
            Path::new(&out_dir).join("world-countries.geo.json"),
            r#"{"type":"FeatureCollection","features":[]}"#,
        )
        .unwrap();
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../fixtures/emissions.csv");
    println!("cargo:rerun-if-changed=../fixtures/world-countries.geo.json");
}
