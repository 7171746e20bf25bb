// Constants for the Java code generator

/// One level of indentation
pub const INDENT: &str = "    ";

/// Line terminator written after every line, including the last
pub const NEWLINE: &str = "\n";

/// Opening line of the generated program
pub const CLASS_HEADER: &str = "public final class Main {";

/// Entry point that wraps every compiled statement
pub const MAIN_HEADER: &str = "public static void main(String[] args) {";

pub const BLOCK_END: &str = "}";
