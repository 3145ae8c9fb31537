pub mod a001_taxonomy;
