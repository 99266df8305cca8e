mod eval;
mod rpn;
mod server;
