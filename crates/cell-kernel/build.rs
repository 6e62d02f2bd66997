use std::env;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Largest divisor the reciprocal table covers (a full 8x8 block is 64 pixels,
/// the table leaves headroom up to 256).
const MAX_DIVISOR: u64 = 256;

/// Fixed-point scale of the reciprocal table, in bits.
///
/// 2^23 with ceiling rounding is the smallest scale for which
/// `(n * table[d] + 2^22) >> 23` reproduces round-half-up division for every
/// numerator 0..=16320 and divisor 1..=256.
const RECIPROCAL_SHIFT: u32 = 23;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("reciprocal_table.rs");
    let mut file = File::create(&dest_path).unwrap();

    writeln!(file, "/// Fixed-point scale of [`RECIPROCALS`], in bits.").unwrap();
    writeln!(file, "pub const RECIPROCAL_SHIFT: u32 = {RECIPROCAL_SHIFT};").unwrap();
    writeln!(file).unwrap();

    writeln!(file, "/// Reciprocal lookup table").unwrap();
    writeln!(
        file,
        "/// Index: divisor 0..=256, Value: ceil(2^{RECIPROCAL_SHIFT} / divisor), 0 for divisor 0"
    )
    .unwrap();
    writeln!(
        file,
        "pub static RECIPROCALS: [u32; {}] = [",
        MAX_DIVISOR + 1
    )
    .unwrap();
    for d in 0..=MAX_DIVISOR {
        let value = if d == 0 {
            0
        } else {
            (1u64 << RECIPROCAL_SHIFT).div_ceil(d)
        };
        if d > 0 && d % 8 == 0 {
            writeln!(file).unwrap();
        }
        write!(file, "    {value},").unwrap();
    }
    writeln!(file, "\n];").unwrap();

    println!("cargo::rerun-if-changed=build.rs");
}
