pub mod pretty_print;
