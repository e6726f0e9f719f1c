pub mod piezas;
