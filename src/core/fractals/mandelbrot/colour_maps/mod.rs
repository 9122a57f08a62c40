pub mod hsv_hue;
