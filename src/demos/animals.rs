/// Anything that can make a sound.
pub trait Speak {
    fn sound(&self) -> &'static str;
}

/// The closed set of creatures in the demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Animal {
    Bird,
    Cat,
}

impl Speak for Animal {
    fn sound(&self) -> &'static str {
        match self {
            Animal::Bird => "chirp",
            Animal::Cat => "Meaw",
        }
    }
}

/// The mixed collection the demo iterates over.
pub fn menagerie() -> Vec<Animal> {
    vec![Animal::Bird, Animal::Cat]
}

/// Invoke `sound()` on each member, in order.
pub fn chorus<S: Speak>(animals: &[S]) -> Vec<&'static str> {
    animals.iter().map(Speak::sound).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chorus_in_collection_order() {
        assert_eq!(chorus(&menagerie()), vec!["chirp", "Meaw"]);
        assert_eq!(chorus(&[Animal::Cat, Animal::Cat]), vec!["Meaw", "Meaw"]);
    }
}
