mod algebra;
mod parse;
