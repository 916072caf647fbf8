//! Classical sections of the virtual lab: the Singleton bound and
//! polynomial-evaluation codewords, printed with the demo's default inputs.

use qirs::{CodeParameters, Codeword, MessagePolynomial, QirsError};

fn main() -> Result<(), QirsError> {
    // --- Section 1: Maximum Distance Separable (MDS) codes ---
    println!("## Maximum Distance Separable (MDS) Codes\n");
    println!("An MDS code satisfies the Singleton Bound: d = n - k + 1");
    println!("Reed-Solomon codes meet this bound with equality.\n");

    let (n, k) = (7, 3); // demo defaults
    let params = CodeParameters::new(n, k)?;
    println!("n = {}, k = {}", params.n(), params.k());
    println!("{}\n", params);

    // --- Section 2: Classical Reed-Solomon encoding ---
    println!("## Classical Reed-Solomon Encoding\n");
    println!("Message symbols become polynomial coefficients; the codeword is");
    println!("the polynomial evaluated at distinct points.\n");

    let message_input = "3,5,2"; // demo default
    match MessagePolynomial::parse(message_input) {
        Ok(message) => {
            println!("Message polynomial:");
            println!("  m(x) = {}", message);

            let codeword = Codeword::encode(&message);
            println!("{}", codeword);
            println!(
                "  ({} coefficients -> {} evaluation points: two redundant symbols)",
                message.coefficients().len(),
                codeword.len()
            );
        }
        Err(_) => {
            // The demo's single coarse failure banner.
            println!("Please enter valid integers.");
        }
    }

    // The same section with malformed input, to show the failure banner.
    println!("\nRe-running the encoder with message input \"a,b,c\":");
    if MessagePolynomial::parse("a,b,c").is_err() {
        println!("Please enter valid integers.");
    }

    Ok(())
}
