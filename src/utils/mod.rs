pub mod time;

/// Generates a random 21 character id.
pub fn longid() -> String {
    nanoid::nanoid!()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_longid() {
        let a = longid();
        assert_eq!(a.len(), 21);
        assert_ne!(a, longid());
    }
}
