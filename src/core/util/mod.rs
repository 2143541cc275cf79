pub mod map_coordinate;
