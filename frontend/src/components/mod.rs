mod layout;
mod pokedex;

pub use layout::Layout;
pub use pokedex::Pokedex;
