pub mod p900_rota;
