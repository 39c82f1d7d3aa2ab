use cadastre_types::{DocumentDigest, LandTitle};

/// The fixed set of records written by ledger initialization at deployment.
///
/// Digests are carried verbatim from the already-digested documents on the
/// shared store; initialization never recomputes them.
pub fn seed_titles() -> Vec<LandTitle> {
    vec![
        LandTitle::new(
            "TF003",
            "Djiby Loum",
            "123456",
            700,
            "/mnt/shared_dir/tf003.pdf",
            seed_digest("a8472b5ec66cfcb5ba20ae4e6b23c8c7277457df"),
        ),
        LandTitle::new(
            "TF002",
            "Ndeye Fatou Dabo",
            "6543211",
            1000,
            "/mnt/shared_dir/tf002.pdf",
            seed_digest("6add312cd1ea92f19e803ee463cd7a8edc5736a8"),
        ),
    ]
}

fn seed_digest(hex: &str) -> DocumentDigest {
    DocumentDigest::from_hex(hex).expect("seed digest is valid hex")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_carry_40_hex_digests() {
        let seeds = seed_titles();
        assert_eq!(seeds.len(), 2);
        for title in &seeds {
            assert_eq!(title.document_digest.to_hex().len(), 40);
        }
    }

    #[test]
    fn seed_ids_are_unique() {
        let seeds = seed_titles();
        assert_ne!(seeds[0].id, seeds[1].id);
    }
}
