//! Demonstrates building a cipher, encrypting and decrypting a message.

use playfair_core::Playfair;

fn main() {
    let mut cipher =
        Playfair::new("hide the gold in the tree stump", "playfair example").expect("valid keyword");

    let encrypted = cipher.encrypt();
    assert_eq!(encrypted, "bmodzbxdnabekudmuixmmouvif");

    cipher.set_message(&encrypted);
    let decrypted = cipher.decrypt();
    assert_eq!(decrypted, "hidethegoldinthetrexestump");

    println!("square:\n{}", cipher.render_grid());
    println!("encrypted: {encrypted}");
    println!("decrypted: {decrypted}");
    println!("example succeeded; ciphertext matches the reference vector");
}
