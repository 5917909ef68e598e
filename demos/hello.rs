use rscodec::{CodecConfig, ReedSolomon};
use tracing_subscriber::EnvFilter;

fn main() {
    // RUST_LOG=rscodec=trace shows the intermediate buffers
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let rs = ReedSolomon::new(CodecConfig::new(6)).unwrap();

    let mut encoded = rs.encode(b"hello Reed-Solomon world").unwrap();
    println!("Encoded:         {:?}", encoded);

    // corrupt the message
    encoded[0] = 20;
    encoded[1] = 0;
    encoded[2] = 3;
    println!("Corrupted:       {:?}", encoded);

    match rs.decode(&encoded) {
        Ok(decoded) => {
            println!("Decoded bytes:   {:?}", decoded.message);
            println!("Corrected:       {:?}", decoded.corrected);
            println!(
                "Decoded message: {}",
                String::from_utf8_lossy(&decoded.message)
            );
        }
        Err(err) => eprintln!("Could not correct message: {}", err),
    }
}
