//! Chat WebSocket tests
