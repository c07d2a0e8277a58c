//! Emits the GF(2^16) log/exp tables as a Rust source file.
//!
//! The tables embedded in the library come out of this tool, which derives
//! them from two choices: the irreducible polynomial 0x1100B and the
//! multiplicative generator 257. It recomputes everything from first
//! principles with carry-less multiplication, checks that the generator
//! really enumerates all 65535 non-zero elements, and writes the result to
//! `src/tables.rs`. Nothing here runs at library runtime.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use shamir16::FIELD_SIZE;

/// Low 16 bits of the irreducible polynomial x^16 + x^12 + x^3 + x + 1;
/// the x^16 term is absorbed by the shift during reduction.
const POLYNOMIAL: u16 = 0x100B;

/// Generator of the multiplicative group.
const GENERATOR: u16 = 257;

const HEADER: &str = "// Generated by gen-tables; do not edit.
//
// Log and exp tables for GF(2^16) under the irreducible polynomial
// x^16 + x^12 + x^3 + x + 1 (0x100B) with multiplicative generator 257.

";

/// Regenerate the GF(2^16) log/exp tables embedded in the library.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Path of the source file to write.
    #[arg(long, default_value = "src/tables.rs")]
    out: PathBuf,
}

/// Carry-less multiplication in GF(2^16): bit-serial polynomial
/// multiplication over GF(2), reducing whenever a shift drops a set bit 15.
fn gf_mult(mut a: u16, mut b: u16) -> u16 {
    let mut product = 0;
    while a > 0 && b > 0 {
        // Polynomial addition of a whenever the low term of b is set.
        if b & 1 == 1 {
            product ^= a;
        }
        b >>= 1;

        let carry = a & 0x8000 != 0;
        a <<= 1;
        if carry {
            a ^= POLYNOMIAL;
        }
    }
    product
}

/// Walk powers of the generator until the product cycles back to one,
/// filling both tables. Fails if the cycle closes early, i.e. the chosen
/// generator is not a primitive root.
fn generate() -> Result<(Vec<u16>, Vec<u16>)> {
    let mut exp_table = Vec::with_capacity(FIELD_SIZE);
    exp_table.push(1);
    exp_table.push(GENERATOR);

    let mut log_table = vec![0u16; FIELD_SIZE];
    log_table[GENERATOR as usize] = 1;

    let mut product = GENERATOR;
    let mut count: usize = 2;
    while product != 1 {
        product = gf_mult(GENERATOR, product);
        exp_table.push(product);
        log_table[product as usize] = count as u16;
        count += 1;
    }

    if count != FIELD_SIZE {
        bail!(
            "generator {GENERATOR} cycles after {count} elements instead of {FIELD_SIZE}; \
             select a different one"
        );
    }

    Ok((log_table, exp_table))
}

fn render_entries(table: &[u16], out: &mut String) {
    for chunk in table.chunks(16) {
        let line: Vec<String> = chunk.iter().map(|v| format!("0x{v:04x}")).collect();
        out.push_str("    ");
        out.push_str(&line.join(", "));
        out.push_str(",\n");
    }
}

fn render(log_table: &[u16], exp_table: &[u16]) -> String {
    let mut out = String::from(HEADER);

    out.push_str(
        "/// LOG_TABLE[v] is the exponent e such that 257^e = v. The entry for zero\n\
         /// is never read on any path whose output survives masking.\n",
    );
    out.push_str("pub(crate) static LOG_TABLE: [u16; 65536] = [\n");
    render_entries(log_table, &mut out);
    out.push_str("];\n\n");

    out.push_str("/// EXP_TABLE[e] = 257^e. The final entry closes the cycle back to one.\n");
    out.push_str("pub(crate) static EXP_TABLE: [u16; 65536] = [\n");
    render_entries(exp_table, &mut out);
    out.push_str("];\n");

    out
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (log_table, exp_table) = generate()?;
    let source = render(&log_table, &exp_table);
    std::fs::write(&cli.out, source).with_context(|| format!("write {:?}", cli.out))?;

    eprintln!("  wrote {} ({FIELD_SIZE} entries per table)", cli.out.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carry_less_multiplication_known_values() {
        // (x + 1)(x^2 + x + 1) = x^3 + 1, no reduction needed.
        assert_eq!(gf_mult(3, 7), 9);
        // x^15 * x crosses the degree bound and reduces by 0x100B.
        assert_eq!(gf_mult(0x8000, 2), 0x100B);

        for a in [1u16, 2, 257, 0x1234, 0xffff] {
            assert_eq!(gf_mult(a, 1), a);
            assert_eq!(gf_mult(1, a), a);
            assert_eq!(gf_mult(a, 0), 0);
        }
    }

    #[test]
    fn generator_enumerates_the_whole_group() {
        let (log_table, exp_table) = generate().unwrap();
        assert_eq!(exp_table.len(), FIELD_SIZE);
        assert_eq!(exp_table[0], 1);
        for v in 1..FIELD_SIZE {
            assert_eq!(exp_table[log_table[v] as usize] as usize, v);
        }
    }
}
