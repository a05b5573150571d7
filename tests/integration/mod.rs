mod sale_flow;
