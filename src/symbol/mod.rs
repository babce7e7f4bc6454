mod fmt;
#[cfg(test)]
mod tests;

use intaglio::{Symbol as SymbolInner, SymbolOverflowError, SymbolTable};


/// A symbol is a reference to a field identifier stored in the interner.
/// Its id is the synthetic suffix used by the generated storage slot.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Symbol(SymbolInner);


impl Symbol {
	/// The synthetic numeric id.
	pub fn id(self) -> u32 {
		self.0.id()
	}
}


/// The identifier table: field-style identifiers referenced by native fragments.
/// Ids are handed out sequentially in first-occurrence order, and entries are never
/// removed, so a name keeps the same id for the whole compilation.
#[derive(Debug)]
pub struct Interner(SymbolTable);


impl Interner {
	/// Create a new, empty interner.
	pub fn new() -> Self {
		Self(SymbolTable::new())
	}


	/// Get the symbol for a name, if already interned.
	pub fn get<T>(&self, name: T) -> Option<Symbol>
	where
		T: AsRef<str>,
	{
		self.0
			.check_interned(name.as_ref())
			.map(Symbol)
	}


	/// Get the symbol for a name. The name is interned if needed.
	pub fn get_or_intern<T>(&mut self, name: T) -> Result<Symbol, SymbolOverflowError>
	where
		T: AsRef<str>,
	{
		let name = name.as_ref().to_owned();

		self.0
			.intern(name)
			.map(Symbol)
	}


	/// Resolve the name for a symbol.
	pub fn resolve(&self, symbol: Symbol) -> Option<&str> {
		self.0.get(symbol.0)
	}


	/// Iterate over all entries, in id order.
	pub fn iter(&self) -> impl Iterator<Item = (Symbol, &str)> {
		self.0
			.iter()
			.map(|(symbol, name)| (Symbol(symbol), name))
	}


	/// Get the number of interned names.
	pub fn len(&self) -> usize {
		self.0.len()
	}


	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}


impl Default for Interner {
	fn default() -> Self {
		Self::new()
	}
}
