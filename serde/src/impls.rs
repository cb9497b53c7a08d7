mod option;
mod scalars;
mod string;
