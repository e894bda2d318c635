mod bootstrap;
mod helpers;
