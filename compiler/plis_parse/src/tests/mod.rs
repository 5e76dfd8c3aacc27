//! Property tests across the scanner and the parser.
