//! Host-based tests for the ESP32 web OTA engine
//! These tests run on the development machine, not on the ESP32
