pub mod carousel;
pub mod lightbox;
pub mod menu_bar;
pub mod pointer;
pub mod status;
